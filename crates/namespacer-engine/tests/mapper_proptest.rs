use namespacer_engine::{apply_prefix, MapperConfig, NamespaceDefinition, StreamMapper};
use namespacer_types::catalog::{ConfiguredCatalog, ConfiguredStream, StreamDescriptor};
use namespacer_types::message::Message;
use proptest::prelude::*;

fn custom_format() -> impl Strategy<Value = NamespaceDefinition> {
    prop_oneof![
        "[a-z_]{0,6}".prop_map(NamespaceDefinition::CustomFormat),
        ("[a-z_]{0,4}", "[a-z_]{0,4}").prop_map(|(head, tail)| {
            NamespaceDefinition::CustomFormat(format!("{head}${{SOURCE_NAMESPACE}}{tail}"))
        }),
    ]
}

fn definition() -> impl Strategy<Value = NamespaceDefinition> {
    prop_oneof![
        Just(NamespaceDefinition::Source),
        Just(NamespaceDefinition::Destination),
        custom_format(),
    ]
}

fn catalog() -> impl Strategy<Value = ConfiguredCatalog> {
    prop::collection::vec(
        ("[a-z_]{1,10}", prop::option::of("[a-z_]{0,8}")),
        0..6,
    )
    .prop_map(|streams| {
        ConfiguredCatalog::new(
            streams
                .into_iter()
                .map(|(name, namespace)| StreamDescriptor::new(name, namespace))
                .map(ConfiguredStream::new)
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn map_catalog_leaves_input_untouched(
        def in definition(),
        prefix in prop::option::of("[a-z_]{0,5}"),
        input in catalog(),
    ) {
        let mapper = StreamMapper::new(MapperConfig::new(def, prefix));
        let before = input.clone();
        let _ = mapper.map_catalog(&input);
        prop_assert_eq!(input, before);
    }

    #[test]
    fn catalog_and_record_resolve_identically(
        def in definition(),
        prefix in prop::option::of("[a-z_]{0,5}"),
        name in "[a-z_]{1,10}",
        namespace in prop::option::of("[a-z_]{0,8}"),
    ) {
        let mapper = StreamMapper::new(MapperConfig::new(def, prefix));
        let cat = ConfiguredCatalog::new(vec![ConfiguredStream::new(StreamDescriptor::new(
            name.clone(),
            namespace.clone(),
        ))]);
        let msg = Message::record(name, serde_json::json!({"k": 1}), 7).with_namespace(namespace);
        let before = msg.clone();

        let mapped_catalog = mapper.map_catalog(&cat);
        let mapped_msg = mapper.map_message(&msg);
        let record = mapped_msg.as_record().expect("record stays a record");

        prop_assert_eq!(&msg, &before);
        prop_assert_eq!(&mapped_catalog.streams[0].stream.name, &record.stream);
        prop_assert_eq!(&mapped_catalog.streams[0].stream.namespace, &record.namespace);
    }

    #[test]
    fn source_mode_is_identity(namespace in prop::option::of(".{0,12}")) {
        prop_assert_eq!(NamespaceDefinition::Source.resolve(namespace.as_deref()), namespace);
    }

    #[test]
    fn destination_mode_is_always_absent(namespace in prop::option::of(".{0,12}")) {
        prop_assert_eq!(NamespaceDefinition::Destination.resolve(namespace.as_deref()), None);
    }

    #[test]
    fn custom_format_never_yields_empty_string(
        def in custom_format(),
        namespace in prop::option::of("[a-z_]{0,8}"),
    ) {
        prop_assert_ne!(def.resolve(namespace.as_deref()), Some(String::new()));
    }

    #[test]
    fn resolution_is_deterministic(
        def in definition(),
        namespace in prop::option::of("[a-z_]{0,8}"),
    ) {
        prop_assert_eq!(def.resolve(namespace.as_deref()), def.resolve(namespace.as_deref()));
    }

    #[test]
    fn prefix_concatenates_without_separator(name in "[a-z_]{0,10}", prefix in "[a-z_]{1,5}") {
        let out = apply_prefix(&name, Some(&prefix));
        prop_assert_eq!(out, format!("{prefix}{name}"));
    }

    #[test]
    fn repeated_mapping_double_prefixes(
        prefix in "[a-z_]{1,5}",
        input in catalog(),
    ) {
        let config = MapperConfig::new(NamespaceDefinition::Source, Some(prefix.clone()));
        let mapper = StreamMapper::new(config);
        let twice = mapper.map_catalog(&mapper.map_catalog(&input));
        for (orig, mapped) in input.streams.iter().zip(&twice.streams) {
            prop_assert_eq!(&mapped.stream.name, &format!("{prefix}{prefix}{}", orig.stream.name));
        }
    }
}
