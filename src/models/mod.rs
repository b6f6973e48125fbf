//! Document model
//!
//! The typed object graph the codec reads and writes:
//! - [`Compose`]: the document root with its named resource maps
//! - [`Service`] and its nested settings
//! - Union values ([`ServiceVolume`], [`ServiceSecret`], [`ServiceConfig`],
//!   [`PublishedPort`]) that remember whether they were written short or long

pub mod collection;
pub mod compose;
pub mod deploy;
pub mod file_reference;
pub mod port;
pub mod service;
pub mod short_or_long;
pub mod volume;

pub use collection::ServiceItems;
pub use compose::{Compose, ConfigDefinition, NetworkDefinition, SecretDefinition, VolumeDefinition};
pub use deploy::{
    Deploy, EndpointMode, Placement, PlacementPreference, ReplicationMode, ResourceSpec, Resources,
    RestartCondition, RestartPolicy, UpdateConfig, UpdateFailureAction, UpdateOrder,
};
pub use file_reference::{ConfigSpec, SecretSpec, ServiceConfig, ServiceSecret};
pub use port::{Port, PublishedPort};
pub use service::{Build, BuildArgument, Service};
pub use short_or_long::{LongForm, ShortOrLong};
pub use volume::{BindOptions, ServiceVolume, TmpfsOptions, VolumeOptions, VolumeSpec};
