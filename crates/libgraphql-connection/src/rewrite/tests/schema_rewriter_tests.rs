use crate::ast;
use crate::loc;
use crate::rewrite::merge_synthesized_types;
use crate::rewrite::rewrite_marked_fields;
use crate::scan::scan_schema;
use crate::scan::FieldCoordinate;
use crate::schema_document::DefinitionOrigin;
use crate::schema_document::SchemaDocument;
use crate::synth::synthesize_types;
use crate::tests::test_utils::argument_names;
use crate::tests::test_utils::directive_names;
use crate::tests::test_utils::document_from_str;
use crate::tests::test_utils::find_field;
use crate::tests::test_utils::type_names;
use crate::ConnectionConfig;
use crate::ConnectionTransformError;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ConnectionTransformError>;

fn rewrite_str(
    schema: &str,
    config: &ConnectionConfig,
) -> Result<(SchemaDocument, Vec<FieldCoordinate>)> {
    let original = document_from_str(schema);
    let scan = scan_schema(&original, config);
    let synthesized = synthesize_types(&scan, config)?;
    let mut document = merge_synthesized_types(original, synthesized, config);
    let rewritten = rewrite_marked_fields(&mut document, &scan, config)?;
    Ok((document, rewritten))
}

mod merge {
    use super::*;

    #[test]
    fn synthesized_types_then_declaration_then_originals() -> Result<()> {
        let (document, _) = rewrite_str(
            concat!(
                "type User { posts: [Post] @connection }\n",
                "type Post { id: ID }\n",
            ),
            &ConnectionConfig::default(),
        )?;

        let origins: Vec<_> = document.definitions().iter()
            .map(|sourced| sourced.origin().clone())
            .collect();
        assert_eq!(origins, vec![
            DefinitionOrigin::Synthesized,
            DefinitionOrigin::Synthesized,
            DefinitionOrigin::Synthesized,
            DefinitionOrigin::Synthesized,
            DefinitionOrigin::Source(PathBuf::from("str://0")),
            DefinitionOrigin::Source(PathBuf::from("str://0")),
        ]);
        assert_eq!(
            type_names(&document),
            vec!["PageInfo", "PostEdge", "PostConnection", "User", "Post"],
        );
        assert!(matches!(
            document.definitions()[3].definition(),
            ast::schema::Definition::DirectiveDefinition(directive_def)
                if directive_def.name == "connection",
        ));

        Ok(())
    }

    #[test]
    fn existing_marker_declaration_is_not_duplicated() -> Result<()> {
        let (document, _) = rewrite_str(
            concat!(
                "directive @connection on FIELD_DEFINITION\n",
                "type User { posts: [Post] @connection }\n",
                "type Post { id: ID }\n",
            ),
            &ConnectionConfig::default(),
        )?;

        let num_directive_defs = document.definitions().iter()
            .filter(|sourced| matches!(
                sourced.definition(),
                ast::schema::Definition::DirectiveDefinition(_),
            ))
            .count();
        assert_eq!(num_directive_defs, 1);
        assert!(document.defines_directive("connection"));

        Ok(())
    }

    #[test]
    fn declaration_follows_the_configured_marker_name() -> Result<()> {
        let (document, _) = rewrite_str(
            "type Query { id: ID }",
            &ConnectionConfig::default().with_directive_name("paginated"),
        )?;

        assert!(document.defines_directive("paginated"));
        assert!(!document.defines_directive("connection"));

        Ok(())
    }
}

mod rewrite {
    use super::*;

    #[test]
    fn marked_field_becomes_a_connection_field() -> Result<()> {
        let (document, rewritten) = rewrite_str(
            concat!(
                "type User {\n",
                "  \"The user's posts\"\n",
                "  posts(orderBy: String): [Post!]! @connection @deprecated(reason: \"use feed\")\n",
                "}\n",
                "type Post { id: ID }\n",
            ),
            &ConnectionConfig::default(),
        )?;

        assert_eq!(rewritten, vec![FieldCoordinate::new("User", "posts")]);

        let field = find_field(&document, "User", "posts")
            .expect("User.posts should still exist");
        assert_eq!(
            field.field_type,
            ast::schema::Type::NamedType("PostConnection".to_string()),
        );
        assert_eq!(
            argument_names(field),
            vec!["orderBy", "after", "first", "before", "last"],
        );
        assert_eq!(directive_names(&field.directives), vec!["deprecated"]);
        assert_eq!(field.description.as_deref(), Some("The user's posts"));

        let last_arg = &field.arguments[4];
        assert_eq!(last_arg.value_type, ast::schema::Type::NamedType("Int".to_string()));
        assert_eq!(last_arg.default_value, None);

        Ok(())
    }

    #[test]
    fn unmarked_fields_are_untouched() -> Result<()> {
        let (document, _) = rewrite_str(
            concat!(
                "type User {\n",
                "  posts: [Post] @connection\n",
                "  pinned: [Post!]\n",
                "}\n",
                "type Post { id: ID }\n",
            ),
            &ConnectionConfig::default(),
        )?;

        let field = find_field(&document, "User", "pinned")
            .expect("User.pinned should still exist");
        assert!(field.arguments.is_empty());
        assert_eq!(
            field.field_type,
            ast::schema::Type::ListType(Box::new(ast::schema::Type::NonNullType(
                Box::new(ast::schema::Type::NamedType("Post".to_string())),
            ))),
        );

        Ok(())
    }

    #[test]
    fn rewrites_interface_and_extension_fields_in_document_order() -> Result<()> {
        let (document, rewritten) = rewrite_str(
            concat!(
                "interface Node { children: [Node] @connection }\n",
                "type User implements Node {\n",
                "  children: [Node] @connection\n",
                "}\n",
                "extend type User { friends: [User] @connection }\n",
            ),
            &ConnectionConfig::default(),
        )?;

        assert_eq!(rewritten, vec![
            FieldCoordinate::new("Node", "children"),
            FieldCoordinate::new("User", "children"),
            FieldCoordinate::new("User", "friends"),
        ]);

        let friends = find_field(&document, "User", "friends")
            .expect("User.friends should still exist");
        assert_eq!(
            friends.field_type,
            ast::schema::Type::NamedType("UserConnection".to_string()),
        );

        Ok(())
    }

    #[test]
    fn only_the_configured_marker_is_removed() -> Result<()> {
        let (document, rewritten) = rewrite_str(
            concat!(
                "type User {\n",
                "  posts: [Post] @paginated\n",
                "  comments: [Comment] @connection\n",
                "}\n",
            ),
            &ConnectionConfig::default().with_directive_name("paginated"),
        )?;

        assert_eq!(rewritten, vec![FieldCoordinate::new("User", "posts")]);

        let comments = find_field(&document, "User", "comments")
            .expect("User.comments should still exist");
        assert_eq!(directive_names(&comments.directives), vec!["connection"]);
        assert!(comments.arguments.is_empty());

        Ok(())
    }

    #[test]
    fn fields_missing_from_the_scan_are_left_alone() -> Result<()> {
        let config = ConnectionConfig::default();
        let scan = scan_schema(&document_from_str("type Query { id: ID }"), &config);

        let mut document = document_from_str(
            "type User { posts: [Post] @connection }",
        );
        let rewritten = rewrite_marked_fields(&mut document, &scan, &config)?;

        assert!(rewritten.is_empty());
        let posts = find_field(&document, "User", "posts")
            .expect("User.posts should still exist");
        assert_eq!(directive_names(&posts.directives), vec!["connection"]);

        Ok(())
    }

    #[test]
    fn existing_pagination_argument_is_a_conflict() {
        let result = rewrite_str(
            concat!(
                "type Post { id: ID }\n",
                "type User {\n",
                "  posts(first: Int): [Post] @connection\n",
                "}\n",
            ),
            &ConnectionConfig::default(),
        );

        match result {
            Err(ConnectionTransformError::PaginationArgumentConflict {
                argument_name,
                directive_name,
                field,
                location,
            }) => {
                assert_eq!(argument_name, "first");
                assert_eq!(directive_name, "connection");
                assert_eq!(field, FieldCoordinate::new("User", "posts"));
                assert_eq!(location, loc::SchemaDefLocation::Schema(
                    loc::FilePosition {
                        col: 9,
                        file: PathBuf::from("str://0"),
                        line: 3,
                    },
                ));
            },
            other => panic!("Expected a PaginationArgumentConflict error, got {other:?}"),
        }
    }
}
