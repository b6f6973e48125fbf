//! Property tests for whole-document emission and parsing.

use indexmap::IndexMap;
use proptest::prelude::*;

use compose_codec::models::{ConfigSpec, SecretSpec, VolumeSpec};
use compose_codec::{
    emit, parse, try_parse, Compose, FileMode, LineEnding, Port, PublishedPort, Service,
    ServiceConfig, ServiceItems, ServiceSecret, ServiceVolume, ShortOrLong,
};

fn name() -> impl Strategy<Value = String> {
    // Skip words a YAML 1.1 reader might resolve to null or a boolean.
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,8}")
        .unwrap()
        .prop_filter("not a reserved word", |s| {
            !["null", "true", "false", "yes", "no", "on", "off", "y", "n"].contains(&s.as_str())
        })
}

/// Printable text, including characters that force quoting
fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~]{0,16}").unwrap()
}

fn mode() -> impl Strategy<Value = FileMode> {
    let literal = prop_oneof![
        (0u32..=0o777).prop_map(|v| format!("0{v:o}")),
        (0u32..=0o777).prop_map(|v| format!("0o{v:o}")),
        (0u32..=511).prop_map(|v| v.to_string()),
    ];
    literal.prop_map(|l| FileMode::parse(&l).unwrap())
}

fn volume() -> impl Strategy<Value = ServiceVolume> {
    prop_oneof![
        text().prop_map(ShortOrLong::Short),
        (
            proptest::option::of(text()),
            proptest::option::of(text()),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(source, target, read_only)| {
                ShortOrLong::Long(VolumeSpec {
                    source,
                    target,
                    read_only,
                    ..VolumeSpec::default()
                })
            }),
    ]
}

fn secret() -> impl Strategy<Value = ServiceSecret> {
    prop_oneof![
        text().prop_map(ShortOrLong::Short),
        (name(), proptest::option::of(text()), proptest::option::of(mode())).prop_map(
            |(source, target, mode)| {
                ShortOrLong::Long(SecretSpec {
                    source: Some(source),
                    target,
                    mode,
                    ..SecretSpec::default()
                })
            }
        ),
    ]
}

fn config() -> impl Strategy<Value = ServiceConfig> {
    (name(), proptest::option::of(mode())).prop_map(|(source, mode)| {
        ShortOrLong::Long(ConfigSpec {
            source: Some(source),
            mode,
            ..ConfigSpec::default()
        })
    })
}

fn port() -> impl Strategy<Value = Port> {
    let published = prop_oneof![
        any::<u16>().prop_map(PublishedPort::Number),
        (1u16..1000, 1u16..1000).prop_map(|(a, b)| PublishedPort::Text(format!("{a}-{}", a + b))),
        any::<u16>().prop_map(|p| PublishedPort::Text(p.to_string())),
        any::<u16>().prop_map(|p| PublishedPort::Text(format!("+{p}"))),
    ];
    (proptest::option::of(any::<u16>()), proptest::option::of(published)).prop_map(
        |(target, published)| Port {
            target,
            published,
            ..Port::default()
        },
    )
}

fn service() -> impl Strategy<Value = Service> {
    (
        proptest::option::of(text()),
        proptest::collection::vec(text(), 0..4),
        proptest::collection::vec((name(), proptest::option::of(text())), 0..4),
        proptest::collection::vec(port(), 0..3),
        proptest::collection::vec(volume(), 0..4),
        proptest::collection::vec(secret(), 0..3),
        proptest::collection::vec(config(), 0..3),
    )
        .prop_map(|(image, command, environment, ports, volumes, secrets, configs)| Service {
            image,
            command,
            environment: environment.into_iter().collect::<IndexMap<_, _>>(),
            ports,
            volumes: ServiceItems::from(volumes),
            secrets: ServiceItems::from(secrets),
            configs: ServiceItems::from(configs),
            ..Service::default()
        })
}

fn compose() -> impl Strategy<Value = Compose> {
    (
        proptest::option::of(text()),
        proptest::collection::vec((name(), service()), 0..3),
        proptest::collection::vec(name(), 0..3),
    )
        .prop_map(|(version, services, volumes)| {
            let mut compose = Compose {
                version,
                ..Compose::default()
            };
            compose.services = services.into_iter().collect();
            compose.volumes = volumes.into_iter().map(|v| (v, None)).collect();
            compose
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: emit ∘ parse ∘ emit is idempotent.
    #[test]
    fn property_emit_parse_emit_idempotent(document in compose()) {
        let first = emit(&document, LineEnding::Lf).unwrap();
        let reparsed = parse(&first).unwrap();
        let second = emit(&reparsed, LineEnding::Lf).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Published ports keep their number or text variant.
    #[test]
    fn property_published_port_variant_survives(port in port()) {
        let mut service = Service::default();
        service.ports.push(port.clone());
        let document = Compose::new().with_service("app", service);

        let reparsed = parse(&emit(&document, LineEnding::Lf).unwrap()).unwrap();
        prop_assert_eq!(&reparsed.services["app"].ports[0], &port);
    }

    /// PROPERTY: Short literals come back as the same short literals, in order.
    #[test]
    fn property_short_volumes_survive(literals in proptest::collection::vec(text(), 1..6)) {
        let mut service = Service::default();
        for literal in &literals {
            service.volumes.push_short(literal.as_str());
        }
        let document = Compose::new().with_service("app", service);

        let reparsed = parse(&emit(&document, LineEnding::Lf).unwrap()).unwrap();
        let names: Vec<&str> = reparsed.services["app"].volumes.names();
        let expected: Vec<&str> = literals.iter().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
    }

    /// PROPERTY: Mode notation survives a document round trip.
    #[test]
    fn property_mode_survives_document(mode in mode()) {
        let mut service = Service::default();
        service.secrets.push(ShortOrLong::long(SecretSpec::new("s").with_mode(mode)));
        let document = Compose::new().with_service("app", service);

        let reparsed = parse(&emit(&document, LineEnding::Lf).unwrap()).unwrap();
        let parsed_mode = reparsed.services["app"].secrets[0].long_form().and_then(|s| s.mode);
        prop_assert_eq!(parsed_mode, Some(mode));
    }

    /// PROPERTY: `parse` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,256}") {
        let _ = try_parse(&text);
    }

    /// PROPERTY: `parse` never panics on structurally plausible input.
    #[test]
    fn property_parse_never_panics_on_yaml_like_input(
        lines in proptest::collection::vec("[ a-z0-9:\\-\\[\\]{},\"']{0,24}", 0..12)
    ) {
        let _ = try_parse(&lines.join("\n"));
    }
}
