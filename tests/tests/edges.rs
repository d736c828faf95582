//! Keep edges: preconditions, consequences and binding validation.

use keepanno_tests::prelude::*;

mod preconditions {
    use super::*;

    #[test]
    fn test_empty_condition_list_is_always() {
        let preconditions = when(Vec::<KeepItemReference>::new()).unwrap();

        assert!(preconditions.is_always());
        assert_eq!(preconditions, KeepPreconditions::always());
    }

    #[test]
    fn test_single_condition_is_wrapped_exactly() {
        let foo = class_named("com.example", "Foo").unwrap();
        let preconditions = when([foo.clone()]).unwrap();

        assert!(!preconditions.is_always());
        let items: Vec<_> = preconditions.iter().map(|c| c.item().clone()).collect();
        assert_eq!(items, vec![KeepItemReference::from(foo)]);
    }
}

mod consequences {
    use super::*;

    #[test]
    fn test_zero_targets_fail() {
        let result = keep(Vec::<KeepItemReference>::new());
        assert_eq!(result, Err(KeepEdgeError::EmptyConsequences));
    }

    #[test]
    fn test_single_target_is_enumerated() {
        let foo = class_named("com.example", "Foo").unwrap();
        let consequences = keep([foo.clone()]).unwrap();

        let mut items = Vec::new();
        consequences.for_each_target(|t| items.push(t.item().clone()));
        assert_eq!(items, vec![KeepItemReference::from(foo)]);
    }
}

mod rules {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("rules")
            .step(
                "keep_class_unconditionally",
                || {
                    edge(
                        KeepBindings::none(),
                        KeepPreconditions::always(),
                        keep([class_named("com.example", "Foo")?])?,
                    )
                },
                |a| a.edge().unconditional(true).trivial(true).targets(1).bindings(0),
            )
            .step(
                "keep_members_if_class_is_live",
                || {
                    let foo = class_named("com.example", "Foo")?;
                    let fields = KeepMemberItemPattern::builder()
                        .set_class_pattern(foo.clone())
                        .set_member_pattern(KeepFieldPattern::any_field().into())
                        .build();
                    edge(KeepBindings::none(), when([foo])?, keep([fields])?)
                },
                |a| a.edge().unconditional(false).trivial(false).conditions(1),
            )
            .step(
                "condition_on_any_item_is_trivial",
                || {
                    edge(
                        KeepBindings::none(),
                        when([KeepItemPattern::any()])?,
                        keep([class_named("com.example", "Foo")?])?,
                    )
                },
                |a| a.edge().unconditional(false).trivial(true),
            )
            .step(
                "shared_holder_binding",
                || {
                    let mut builder = KeepBindingsBuilder::new();
                    let symbol = builder.fresh_symbol("CLASS");
                    let holder =
                        builder.add_class_binding(symbol, class_named("com.example", "Foo")?)?;
                    let bindings = builder.build();
                    let method = KeepMemberItemPattern::builder()
                        .set_class_reference(holder.to_item_reference())
                        .set_member_pattern(method_named("onCreate")?.into())
                        .build();
                    edge(
                        bindings,
                        when([holder.to_item_reference()])?,
                        keep([method])?,
                    )
                },
                |a| a.edge().bindings(1).binding_references(1).conditions(1),
            )
            .step(
                "target_names_undefined_binding",
                || {
                    let stray = KeepClassBindingReference::new(KeepBindingSymbol::new("Stray"));
                    edge(
                        KeepBindings::none(),
                        KeepPreconditions::always(),
                        keep([stray.to_item_reference()])?,
                    )
                },
                |a| a.error_matching("^Undefined binding for name 'Stray'$"),
            )
            .step(
                "member_binding_used_as_holder",
                || {
                    let mut builder = KeepBindingsBuilder::new();
                    let c = builder.create("C");
                    let holder = builder.add_class_binding(c, KeepClassItemPattern::any_class())?;
                    let m = builder.create("M");
                    let member = builder.add_member_binding(
                        m,
                        KeepMemberItemPattern::builder()
                            .set_class_reference(holder.to_item_reference())
                            .build(),
                    )?;
                    let bindings = builder.build();
                    let misused = KeepClassBindingReference::new(member.symbol().clone());
                    edge(
                        bindings,
                        KeepPreconditions::always(),
                        keep([misused.to_item_reference()])?,
                    )
                },
                |a| a.error("is not a class binding"),
            )
            .step(
                "no_targets",
                || {
                    edge(
                        KeepBindings::none(),
                        KeepPreconditions::always(),
                        keep(Vec::<KeepItemReference>::new())?,
                    )
                },
                |a| a.error("empty consequence set"),
            )
    }

    #[test]
    fn test_rule_construction() {
        scenario().run().unwrap();
    }
}

mod metadata {
    use super::*;

    #[test]
    fn test_edge_carries_meta_info() {
        let context =
            KeepEdgeContext::for_method("Lcom/example/Main;", "main", "([Ljava/lang/String;)V")
                .unwrap();
        let meta = KeepEdgeMetaInfo::builder()
            .set_description("Keep the entry point")
            .set_context(context)
            .build();
        let edge = KeepEdge::builder()
            .set_meta_info(meta.clone())
            .set_consequences(keep([class_named("com.example", "Main").unwrap()]).unwrap())
            .build()
            .unwrap();

        assert_eq!(edge.meta_info(), &meta);
        assert_eq!(
            edge.meta_info().context_descriptor_string().as_deref(),
            Some("Lcom/example/Main;main([Ljava/lang/String;)V")
        );
        assert!(KeepDeclaration::from(edge).meta_info().has_description());
    }
}
