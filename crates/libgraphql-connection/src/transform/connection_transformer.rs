use crate::ast;
use crate::file_reader;
use crate::rewrite;
use crate::scan;
use crate::schema_document;
use crate::schema_document::SchemaDocument;
use crate::synth;
use crate::transform::TransformedSchema;
use crate::validate::SchemaValidator;
use crate::ConnectionConfig;
use crate::ConnectionTransformError;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ConnectionTransformError>;

/// Loads one or more schema sources and applies the connection transform to
/// them as a single schema.
///
/// ```
/// use libgraphql_connection::ConnectionConfig;
/// use libgraphql_connection::ConnectionTransformer;
///
/// let transformed = ConnectionTransformer::new(ConnectionConfig::default())
///     .load_str(None, "type User { posts: [Post!]! @connection }")?
///     .load_str(None, "type Post { id: ID! }\ntype Query { user: User }")?
///     .transform()?;
///
/// assert_eq!(
///     transformed.synthesized_type_names(),
///     &["PageInfo", "PostEdge", "PostConnection"],
/// );
/// # Ok::<(), libgraphql_connection::ConnectionTransformError>(())
/// ```
#[derive(Debug)]
pub struct ConnectionTransformer {
    config: ConnectionConfig,
    document: SchemaDocument,
    str_load_counter: usize,
}
impl ConnectionTransformer {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            document: SchemaDocument::new(),
            str_load_counter: 0,
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Adds an already-parsed schema document.
    pub fn load_ast(
        mut self,
        file_path: Option<PathBuf>,
        ast_doc: ast::schema::Document,
    ) -> Self {
        let file_path = self.source_path(file_path);
        self.document.append_ast(file_path.as_path(), ast_doc);
        self
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_schema_file(file_path)
                .map_err(|err| ConnectionTransformError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path = self.source_path(file_path);
        let num_defs = self.document.append_str(file_path.as_path(), content)
            .map_err(|err| ConnectionTransformError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        log::debug!("Loaded {num_defs} definitions from {file_path:?}.");
        Ok(self)
    }

    /// Runs scan → synthesize → merge → rewrite → validate over everything
    /// loaded so far.
    pub fn transform(self) -> Result<TransformedSchema> {
        let Self { config, document, .. } = self;

        let scan = scan::scan_schema(&document, &config);
        if !scan.duplicate_type_definitions().is_empty() {
            // Nothing is synthesized over an ambiguous schema, but every other
            // structural error in the input is still reported.
            return Err(ConnectionTransformError::ValidationErrors {
                errors: SchemaValidator::new(&document).validate(),
            });
        }

        let synthesized = synth::synthesize_types(&scan, &config)?;
        let synthesized_type_names: Vec<String> = synthesized.iter()
            .map(|type_def| schema_document::type_definition_name(type_def).to_string())
            .collect();

        let mut document = rewrite::merge_synthesized_types(
            document,
            synthesized,
            &config,
        );
        let rewritten_fields = rewrite::rewrite_marked_fields(
            &mut document,
            &scan,
            &config,
        )?;

        let errors = SchemaValidator::new(&document).validate();
        if !errors.is_empty() {
            return Err(ConnectionTransformError::ValidationErrors { errors });
        }

        Ok(TransformedSchema {
            document,
            rewritten_fields,
            synthesized_type_names,
        })
    }

    fn source_path(&mut self, file_path: Option<PathBuf>) -> PathBuf {
        if let Some(file_path) = file_path {
            file_path
        } else {
            let ctr = self.str_load_counter;
            self.str_load_counter += 1;
            PathBuf::from(format!("str://{ctr}"))
        }
    }
}

/// Transforms a single SDL string.
pub fn transform_str(
    config: ConnectionConfig,
    content: &str,
) -> Result<TransformedSchema> {
    ConnectionTransformer::new(config)
        .load_str(None, content)?
        .transform()
}
