//! Pattern canonicalization and builder round trips.

use keepanno_tests::prelude::*;

mod access {
    use super::*;

    #[test]
    fn test_no_visibility_calls_is_any_visibility() {
        let access = KeepMemberAccessPattern::builder().build().unwrap();

        assert!(access.is_any_visibility());
        assert!(access.is_any());
        assert_eq!(access, KeepMemberAccessPattern::any());
    }

    #[test]
    fn test_disallowing_every_visibility_fails() {
        let result = AccessVisibility::ALL
            .into_iter()
            .fold(KeepMethodAccessPattern::builder(), |builder, visibility| {
                builder.set_access_visibility(visibility, false)
            })
            .build();

        assert_eq!(result, Err(KeepEdgeError::EmptyVisibility));
    }

    #[test]
    fn test_allow_then_disallow() {
        // GIVEN public and protected allowed, protected also disallowed
        let access = KeepFieldAccessPattern::builder()
            .set_access_visibility(AccessVisibility::Public, true)
            .set_access_visibility(AccessVisibility::Protected, true)
            .set_access_visibility(AccessVisibility::Protected, false)
            .set_volatile(true)
            .build()
            .unwrap();

        // THEN only public remains
        let member = access.member_access();
        assert!(member.is_visibility_allowed(AccessVisibility::Public));
        assert!(!member.is_visibility_allowed(AccessVisibility::Protected));
        assert!(!member.is_visibility_allowed(AccessVisibility::Private));
        assert!(access.volatile_pattern().is_only_positive());
        assert!(access.transient_pattern().is_any());
    }
}

mod class_names {
    use super::*;

    #[test]
    fn test_exact_binary_name_inserts_separator_only_for_packages() {
        let nested = KeepQualifiedClassNamePattern::exact("com.example", "Foo").unwrap();
        let top = KeepQualifiedClassNamePattern::exact("", "Foo").unwrap();

        assert_eq!(nested.exact_binary_name().as_deref(), Some("com/example/Foo"));
        assert_eq!(top.exact_binary_name().as_deref(), Some("Foo"));
        assert!(top.package_pattern().is_top());
        assert_eq!(nested.exact_descriptor().as_deref(), Some("Lcom/example/Foo;"));
    }

    #[test]
    fn test_builder_round_trip() {
        let package = KeepPackagePattern::exact("com.example").unwrap();
        let name = KeepUnqualifiedClassNamePattern::exact("Foo").unwrap();
        let pattern = KeepQualifiedClassNamePattern::builder()
            .set_package_pattern(package.clone())
            .set_name_pattern(name.clone())
            .build();

        assert_eq!(pattern.package_pattern(), &package);
        assert_eq!(pattern.name_pattern(), &name);
        assert!(pattern.is_exact());
    }

    #[test]
    fn test_any_parts_canonicalize() {
        let pattern = KeepQualifiedClassNamePattern::builder()
            .set_package_pattern(KeepPackagePattern::any())
            .set_name_pattern(KeepUnqualifiedClassNamePattern::any())
            .build();

        assert!(pattern.is_any());
        assert_eq!(pattern, KeepQualifiedClassNamePattern::any());
    }
}

mod instance_of {
    use super::*;

    #[test]
    fn test_exclusive_any_fails() {
        let result = KeepInstanceOfPattern::builder()
            .set_class_name_pattern(KeepQualifiedClassNamePattern::any())
            .set_inclusive(false)
            .build();

        assert_eq!(result, Err(KeepEdgeError::ExclusiveInstanceOfAny));
    }

    #[test]
    fn test_inclusive_any_is_canonical() {
        let result = KeepInstanceOfPattern::builder()
            .set_class_name_pattern(KeepQualifiedClassNamePattern::any())
            .build();

        assert_eq!(result, Ok(KeepInstanceOfPattern::any()));
    }
}

mod members {
    use super::*;

    #[test]
    fn test_method_builder_round_trip() {
        let access = KeepMethodAccessPattern::builder()
            .set_access_visibility(AccessVisibility::Public, true)
            .set_static(true)
            .build()
            .unwrap();
        let name = KeepMethodNamePattern::exact("valueOf").unwrap();
        let return_type =
            KeepMethodReturnTypePattern::from_descriptor("Lcom/example/Color;").unwrap();
        let parameters = KeepMethodParametersPattern::builder()
            .add_type_pattern(KeepTypePattern::from_descriptor("Ljava/lang/String;").unwrap())
            .build();

        let method = KeepMethodPattern::builder()
            .set_access_pattern(access)
            .set_name_pattern(name.clone())
            .set_return_type_pattern(return_type.clone())
            .set_parameters_pattern(parameters.clone())
            .build()
            .unwrap();

        assert_eq!(method.access_pattern(), &access);
        assert_eq!(method.name_pattern(), &name);
        assert_eq!(method.return_type_pattern(), &return_type);
        assert_eq!(method.parameters_pattern(), &parameters);
        assert!(!method.is_any_method());
    }

    #[test]
    fn test_method_without_name_fails() {
        let result = KeepMethodPattern::builder().build();
        assert_eq!(
            result,
            Err(KeepEdgeError::MissingNamePattern { member: "method" })
        );
    }

    #[test]
    fn test_any_field_and_any_method_make_all_members() {
        let members = KeepMembersPattern::builder()
            .add_field(field_named("a").unwrap())
            .add_field(KeepFieldPattern::any_field())
            .add_method(KeepMethodPattern::any_method())
            .build();

        assert!(members.is_all());
    }
}

mod items {
    use super::*;

    #[test]
    fn test_any_item_through_builders() {
        let item = KeepClassItemPattern::builder()
            .set_class_name_pattern(KeepQualifiedClassNamePattern::any())
            .set_instance_of_pattern(KeepInstanceOfPattern::any())
            .set_members_pattern(KeepMembersPattern::all())
            .build();

        assert!(item.is_any());
        assert_eq!(KeepItemPattern::from(item), KeepItemPattern::any());
    }

    #[test]
    fn test_class_only_item_is_not_any() {
        let item = KeepItemPattern::from(KeepClassItemPattern::any_class());
        assert!(!item.is_any());
        assert!(!KeepItemReference::from(item).is_any(&NoBindings));
    }

    #[test]
    fn test_class_item_round_trip() {
        let name = KeepQualifiedClassNamePattern::exact("com.example", "Foo").unwrap();
        let extends = KeepExtendsPattern::from_class_name(
            KeepQualifiedClassNamePattern::exact("com.example", "Base").unwrap(),
        );
        let members = KeepMembersPattern::builder()
            .add_method(method_named("run").unwrap())
            .build();

        let item = KeepClassItemPattern::builder()
            .set_class_name_pattern(name.clone())
            .set_extends_pattern(extends.clone())
            .set_members_pattern(members.clone())
            .build();

        assert_eq!(item.class_name_pattern(), &name);
        assert_eq!(item.extends_pattern(), Some(extends));
        assert_eq!(item.members_pattern(), &members);
        assert!(!item.is_class_only());
    }
}

mod validated_forms {
    use super::*;

    #[test]
    fn test_exact_names_only_come_from_checked_constructors() {
        // GIVEN malformed names and descriptors
        // THEN both the pattern constructors and the name types reject them
        assert!(KeepPackagePattern::exact("a..b/c").is_err());
        assert!(PackageName::new("a..b/c").is_err());
        assert!(KeepUnqualifiedClassNamePattern::exact("a/B").is_err());
        assert!(KeepMethodNamePattern::exact("run()").is_err());
        assert!(KeepTypePattern::from_descriptor("Lcom/example/Foo").is_err());
        assert!(TypeDescriptor::new("Lcom/example/Foo").is_err());

        // AND a well-formed exact name is reachable through its variant
        match KeepPackagePattern::exact("com.example").unwrap() {
            KeepPackagePattern::Exact(name) => assert_eq!(name.as_str(), "com.example"),
            other => panic!("expected an exact package, got {:?}", other),
        }
    }

    #[test]
    fn test_instance_of_over_any_is_any_or_rejected() {
        let inclusive = KeepInstanceOfPattern::builder()
            .set_class_name_pattern(KeepQualifiedClassNamePattern::any())
            .build()
            .unwrap();
        let exclusive = KeepInstanceOfPattern::builder()
            .set_class_name_pattern(KeepQualifiedClassNamePattern::any())
            .set_inclusive(false)
            .build();

        assert!(inclusive.is_any());
        assert_eq!(exclusive, Err(KeepEdgeError::ExclusiveInstanceOfAny));
        assert!(KeepExtendsPattern::from_class_name(KeepQualifiedClassNamePattern::any())
            .to_instance_of()
            .is_any());
    }

    #[test]
    fn test_no_conditions_is_the_single_always_node() {
        let preconditions = KeepPreconditions::builder().build();
        let edge = edge(
            KeepBindings::none(),
            preconditions.clone(),
            keep([class_named("com.example", "Foo").unwrap()]).unwrap(),
        )
        .unwrap();

        assert_eq!(preconditions, KeepPreconditions::always());
        assert!(edge.is_unconditional());
    }

    #[test]
    fn test_no_members_is_the_single_none_node() {
        let members = KeepMembersPattern::builder().build();

        assert!(members.is_none());
        assert_eq!(members, KeepMembersPattern::none());
    }

    #[test]
    fn test_context_descriptors_are_checked() {
        assert!(KeepEdgeContext::for_class("not a descriptor").is_err());
        assert!(KeepEdgeContext::for_field("Lcom/example/Foo;", "count", "long").is_err());
        assert!(KeepEdgeContext::for_class("Lcom/example/Foo;")
            .unwrap()
            .is_class());
    }
}
