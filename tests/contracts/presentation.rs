//! Presentation contracts
//!
//! Quoting, flow style, enum tokens and suppression of empty values.

use compose_codec::models::{Deploy, EndpointMode, Placement, UpdateConfig, UpdateOrder};
use compose_codec::{
    emit, Codec, CodecOptions, Compose, LineEnding, PresentationRules, Service,
};

fn emit_service(service: Service) -> String {
    emit(&Compose::new().with_service("s", service), LineEnding::Lf).unwrap()
}

/// CONTRACT: absent and empty values leave no trace
mod suppression {
    use super::*;

    #[test]
    fn contract_service_without_volumes_has_no_volumes_key() {
        let text = emit_service(Service::from_image("nginx"));
        assert!(!text.contains("volumes"));
        assert_eq!(text, "services:\n  s:\n    image: \"nginx\"\n");
    }

    #[test]
    fn contract_all_empty_record_suppressed() {
        let mut service = Service::from_image("nginx");
        service.deploy = Some(Deploy {
            placement: Some(Placement::default()),
            ..Deploy::default()
        });
        assert_eq!(emit_service(service), "services:\n  s:\n    image: \"nginx\"\n");
    }

    #[test]
    fn contract_empty_document() {
        assert_eq!(emit(&Compose::new(), LineEnding::Lf).unwrap(), "{}\n");
    }

    #[test]
    fn contract_named_entries_kept_when_empty() {
        let mut compose = Compose::new().with_service("idle", Service::default());
        compose.networks.insert("back".to_string(), None);
        assert_eq!(
            emit(&compose, LineEnding::Lf).unwrap(),
            "services:\n  idle: {}\nnetworks:\n  back:\n"
        );
    }
}

/// CONTRACT: text values are double-quoted, keys and tokens are not
mod quoting {
    use super::*;

    #[test]
    fn contract_strings_quoted_numbers_bare() {
        let mut service = Service::from_image("true");
        service.hostname = Some("123".to_string());
        service.privileged = Some(true);
        service.labels.insert("com.example.tier".to_string(), "say \"hi\"".to_string());

        assert_eq!(
            emit_service(service),
            "services:\n  s:\n    image: \"true\"\n    hostname: \"123\"\n    labels:\n      com.example.tier: \"say \\\"hi\\\"\"\n    privileged: true\n"
        );
    }

    #[test]
    fn contract_enum_tokens_bare() {
        let mut service = Service::default();
        service.deploy = Some(Deploy {
            endpoint_mode: Some(EndpointMode::DnsRoundRobin),
            update_config: Some(UpdateConfig {
                order: Some(UpdateOrder::StopFirst),
                ..UpdateConfig::default()
            }),
            ..Deploy::default()
        });

        assert_eq!(
            emit_service(service),
            "services:\n  s:\n    deploy:\n      endpoint_mode: dnsrr\n      update_config:\n        order: stop-first\n"
        );
    }
}

/// CONTRACT: flow style follows the originating field, not the length
mod flow_style {
    use super::*;

    #[test]
    fn contract_command_is_flow_networks_are_block() {
        let mut service = Service::default();
        service.command = vec!["sleep".to_string(), "infinity".to_string()];
        service.networks = vec!["front".to_string()];

        assert_eq!(
            emit_service(service),
            "services:\n  s:\n    command: [sleep, infinity]\n    networks:\n    - \"front\"\n"
        );
    }

    #[test]
    fn contract_flow_items_quoted_only_when_needed() {
        let mut service = Service::default();
        service.entrypoint = vec!["".to_string(), "a,b".to_string(), "-x".to_string(), "ok".to_string()];

        assert_eq!(
            emit_service(service),
            "services:\n  s:\n    entrypoint: [\"\", \"a,b\", \"-x\", ok]\n"
        );
    }

    #[test]
    fn contract_custom_flow_field() {
        let codec = Codec::with_rules(
            CodecOptions::default(),
            PresentationRules::default().with_flow_field("Service", "depends_on"),
        );
        let mut service = Service::default();
        service.depends_on = vec!["db".to_string(), "cache".to_string()];

        let text = codec.emit(&Compose::new().with_service("s", service)).unwrap();
        assert_eq!(text, "services:\n  s:\n    depends_on: [db, cache]\n");
    }
}
