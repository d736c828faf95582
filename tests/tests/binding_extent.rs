//! Binding tables and shared-extent semantics.

use keepanno_tests::prelude::*;

mod construction {
    use super::*;

    #[test]
    fn test_self_referencing_entry_fails() {
        // GIVEN a member item whose holder is the binding being defined
        let mut builder = KeepBindingsBuilder::new();
        let symbol = builder.create("Self");
        let item = KeepMemberItemPattern::builder()
            .set_class_reference(KeepClassBindingReference::new(symbol.clone()).into())
            .build();

        // WHEN adding it
        let result = builder.add_member_binding(symbol, item);

        // THEN the table rejects it
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Recursive binding for name 'Self'");
    }

    #[test]
    fn test_entry_referencing_absent_name_fails() {
        let mut builder = KeepBindingsBuilder::new();
        let absent = KeepBindingSymbol::new("Absent");
        let symbol = builder.create("M");
        let item = KeepMemberItemPattern::builder()
            .set_class_reference(KeepClassBindingReference::new(absent).into())
            .build();

        let result = builder.add_member_binding(symbol, item);

        assert!(matches!(
            result,
            Err(KeepEdgeError::UndefinedBinding { ref name }) if name == "Absent"
        ));
    }

    #[test]
    fn test_zero_entries_give_the_empty_singleton() {
        let a = KeepBindingsBuilder::new().build();
        let b = KeepBindings::none();

        assert!(a.is_none());
        assert!(b.is_none());
        assert_eq!(a, b);
    }

    #[test]
    fn test_identical_entries_from_separate_builders_are_distinct() {
        let build = || -> KeepResult<KeepBindings> {
            let mut builder = KeepBindingsBuilder::new();
            let symbol = builder.create("CLASS");
            builder.add_class_binding(symbol, class_named("com.example", "Foo")?)?;
            Ok(builder.build())
        };
        let first = build().unwrap();
        let second = build().unwrap();

        let a: Vec<_> = first.iter().collect();
        let b: Vec<_> = second.iter().collect();
        assert_eq!(a[0].item(), b[0].item());
        assert_eq!(a[0].symbol().name(), b[0].symbol().name());
        assert_ne!(a[0], b[0]);
        assert_ne!(first, second);
    }
}

mod extent {
    use super::*;

    /// "If some Foo instance has `run`, keep that instance's `<init>`": both items share the
    /// class binding, so they denote members of the same class.
    fn shared_holder_edge() -> KeepResult<KeepEdge> {
        let mut builder = KeepBindingsBuilder::new();
        let class_symbol = builder.fresh_symbol("CLASS");
        let holder = builder.add_class_binding(class_symbol, class_named("com.example", "Foo")?)?;
        let bindings = builder.build();

        let run = KeepMemberItemPattern::builder()
            .set_class_reference(holder.to_item_reference())
            .set_member_pattern(method_named("run")?.into())
            .build();
        let init = KeepMemberItemPattern::builder()
            .set_class_reference(holder.to_item_reference())
            .set_member_pattern(method_named("<init>")?.into())
            .build();

        edge(bindings, when([run])?, keep([init])?)
    }

    /// The same rule with inline copies of the class pattern: any Foo's `<init>` is kept.
    fn inline_copies_edge() -> KeepResult<KeepEdge> {
        let run = member_of(class_named("com.example", "Foo")?, method_named("run")?);
        let init = member_of(class_named("com.example", "Foo")?, method_named("<init>")?);
        edge(KeepBindings::none(), when([run])?, keep([init])?)
    }

    #[test]
    fn test_shared_binding_links_condition_and_target() {
        let edge = shared_holder_edge().unwrap();

        let condition = &edge.preconditions().conditions()[0];
        let target = &edge.consequences().targets()[0];
        let condition_holder = edge.bindings().unique_class_binding([condition.item()]).unwrap();
        let target_holder = edge.bindings().unique_class_binding([target.item()]).unwrap();

        assert!(condition_holder.is_some());
        assert_eq!(condition_holder, target_holder);
        assert_eq!(edge.binding_references().len(), 1);
    }

    #[test]
    fn test_inline_copies_have_no_shared_extent() {
        let edge = inline_copies_edge().unwrap();

        assert!(edge.binding_references().is_empty());
        assert_eq!(edge.consequences_class_binding(), Ok(None));
        assert!(edge.bindings().is_none());
    }

    #[test]
    fn test_shared_and_inline_forms_differ() {
        let shared = shared_holder_edge().unwrap();
        let inline = inline_copies_edge().unwrap();

        assert_ne!(shared, inline);
        assert_eq!(
            shared
                .preconditions()
                .conditions()[0]
                .item()
                .class_name_pattern(shared.bindings()),
            inline
                .preconditions()
                .conditions()[0]
                .item()
                .class_name_pattern(inline.bindings()),
        );
    }
}

mod resolution {
    use super::*;

    #[test]
    fn test_is_any_follows_one_binding() {
        // GIVEN X bound to the "any item" and Y bound to any class without members
        let mut builder = KeepBindingsBuilder::new();
        let x = builder.create("X");
        let any_ref = builder.add_binding(x, KeepItemPattern::any()).unwrap();
        let y = builder.create("Y");
        let class_ref = builder
            .add_class_binding(y, KeepClassItemPattern::any_class())
            .unwrap();
        let bindings = builder.build();

        // THEN only X is "any"
        assert!(bindings.is_any(&any_ref.to_item_reference()));
        assert!(!bindings.is_any(&class_ref.to_item_reference().into()));
    }

    #[test]
    fn test_transitive_references_reach_the_holder() {
        let mut builder = KeepBindingsBuilder::new();
        let c = builder.fresh_symbol("CLASS");
        let holder = builder
            .add_class_binding(c.clone(), KeepClassItemPattern::any_class())
            .unwrap();
        let m = builder.fresh_symbol("MEMBER");
        let member = builder
            .add_member_binding(
                m.clone(),
                KeepMemberItemPattern::builder()
                    .set_class_reference(holder.to_item_reference())
                    .set_member_pattern(field_named("value").unwrap().into())
                    .build(),
            )
            .unwrap();
        let bindings = builder.build();

        let reached: Vec<_> = bindings
            .transitive_references(&member.to_item_reference().into())
            .iter()
            .map(|r| r.symbol().name().to_string())
            .collect();

        assert_eq!(reached, vec!["MEMBER", "CLASS"]);
    }
}
