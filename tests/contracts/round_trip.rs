//! Round-trip contracts
//!
//! Canonical text survives parse → emit unchanged, and emit → parse → emit is
//! a fixed point for documents built in code.

use compose_codec::models::{
    Build, BuildArgument, ConfigSpec, Deploy, Placement, RestartCondition, RestartPolicy,
    SecretSpec, VolumeSpec,
};
use compose_codec::{emit, parse, Compose, FileMode, LineEnding, Service, ShortOrLong};

use crate::common::*;

/// CONTRACT: canonical documents are reproduced byte for byte
mod canonical_text {
    use super::*;

    #[test]
    fn contract_full_stack_is_fixed_point() {
        assert_eq!(reemit(FULL_STACK), FULL_STACK);
    }

    #[test]
    fn contract_mode_spellings_survive() {
        assert_eq!(reemit(MODE_SPELLINGS), MODE_SPELLINGS);
    }

    #[test]
    fn contract_hand_written_text_converges_after_one_pass() {
        let first = reemit(HAND_WRITTEN);
        assert_eq!(reemit(&first), first);
    }

    #[test]
    fn contract_crlf_round_trip() {
        let compose = parse(FULL_STACK).unwrap();
        let crlf = emit(&compose, LineEnding::CrLf).unwrap();
        assert_eq!(crlf, FULL_STACK.replace('\n', "\r\n"));
        assert_eq!(parse(&crlf).unwrap(), compose);
    }
}

/// CONTRACT: emit ∘ parse ∘ emit is idempotent for code-built documents
mod built_documents {
    use super::*;

    fn built_stack() -> Compose {
        let mut web = Service::from_image("registry.local/web:2.0");
        web.build = Some(Build {
            context: Some("./web".to_string()),
            dockerfile: Some("Dockerfile.prod".to_string()),
            args: vec![BuildArgument::new("MODE", "prod=1"), BuildArgument::inherited("TOKEN")],
        });
        web.entrypoint = vec!["/bin/sh".to_string(), "-c".to_string()];
        web.command = vec!["exec app --port=8080".to_string()];
        web.volumes.push_short("./conf:/etc/app:ro");
        web.volumes.push(ShortOrLong::long(VolumeSpec {
            kind: Some("tmpfs".to_string()),
            target: Some("/tmp".to_string()),
            ..VolumeSpec::default()
        }));
        web.secrets.push(ShortOrLong::long(SecretSpec::new("tls_cert")));
        web.configs.push(ShortOrLong::long(
            ConfigSpec::new("app_conf")
                .with_target("/etc/app/app.conf")
                .with_mode(FileMode::parse("0o600").unwrap()),
        ));
        web.deploy = Some(Deploy {
            replicas: Some(3),
            restart_policy: Some(RestartPolicy {
                condition: Some(RestartCondition::Any),
                ..RestartPolicy::default()
            }),
            placement: Some(Placement {
                constraints: vec![
                    "node.role==worker".to_string(),
                    "node.labels.zone==eu, west".to_string(),
                ],
                ..Placement::default()
            }),
            ..Deploy::default()
        });

        let mut compose = Compose::new()
            .with_version("3.9")
            .with_service("web", web)
            .with_service("idle", Service::default());
        compose.volumes.insert("logs".to_string(), None);
        compose
    }

    #[test]
    fn contract_emit_parse_emit_idempotent() {
        let (first, second) = emit_twice(&built_stack());
        assert_eq!(first, second);
    }

    #[test]
    fn contract_reparse_preserves_union_forms() {
        let (first, _) = emit_twice(&built_stack());
        let reparsed = parse(&first).unwrap();
        let web = reparsed.service("web").unwrap();

        assert!(web.volumes[0].short_literal().is_some());
        assert!(web.volumes[1].long_form().is_some());
        // A source-only secret is written as its bare name.
        assert_eq!(web.secrets[0].short_literal(), Some("tls_cert"));
        assert_eq!(
            web.configs[0].long_form().and_then(|c| c.mode).map(|m| m.to_string()),
            Some("0o600".to_string())
        );
    }

    #[test]
    fn contract_awkward_flow_items_survive() {
        let (first, _) = emit_twice(&built_stack());
        let reparsed = parse(&first).unwrap();
        let constraints = &reparsed.services["web"]
            .deploy
            .as_ref()
            .and_then(|d| d.placement.as_ref())
            .unwrap()
            .constraints;
        assert_eq!(constraints[1], "node.labels.zone==eu, west");
    }
}

/// CONTRACT: sequence order is never changed
mod order_preservation {
    use super::*;

    #[test]
    fn contract_volume_order_preserved() {
        let mut service = Service::from_image("app");
        service.volumes.push_short("./data:/app/data");
        service.volumes.push_short("cache:/app/cache");
        let compose = Compose::new().with_service("app", service);

        let text = emit(&compose, LineEnding::Lf).unwrap();
        let reparsed = parse(&text).unwrap();
        assert_eq!(
            reparsed.services["app"].volumes.names(),
            vec!["./data:/app/data", "cache:/app/cache"]
        );
    }

    #[test]
    fn contract_duplicates_kept() {
        let text = "services:\n  app:\n    secrets:\n    - \"a\"\n    - \"a\"\n";
        let compose = parse(text).unwrap();
        assert_eq!(compose.services["app"].secrets.len(), 2);
        assert_eq!(emit(&compose, LineEnding::Lf).unwrap(), text);
    }

    #[test]
    fn contract_service_map_order_preserved() {
        let text = "services:\n  zeta:\n    image: \"z\"\n  alpha:\n    image: \"a\"\n";
        assert_eq!(reemit(text), text);
    }
}
