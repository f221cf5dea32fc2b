use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_connection::CacheHintConfig;
use libgraphql_connection::ConnectionConfig;
use libgraphql_connection::ConnectionTransformer;
use libgraphql_connection::DEFAULT_CACHE_HINT_ARGUMENT_NAME;
use libgraphql_connection::DEFAULT_CACHE_HINT_DIRECTIVE_NAME;
use libgraphql_connection::DEFAULT_CONNECTION_DIRECTIVE_NAME;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct TransformCmd {
    #[arg(
        default_value=DEFAULT_CACHE_HINT_ARGUMENT_NAME,
        help="Numeric argument of the cache-hint directive that carries its \
             max-age.",
        long,
    )]
    cache_hint_argument: String,

    #[arg(
        default_value=DEFAULT_CACHE_HINT_DIRECTIVE_NAME,
        help="Name of the cache-hint directive read by --cache-hints.",
        long,
    )]
    cache_hint_directive: String,

    #[arg(
        help="Copy the highest cache hint found for each base type onto its \
             generated Edge type and its Connection's `edges` and `pageInfo` \
             fields.",
        long,
    )]
    cache_hints: bool,

    #[arg(
        default_value=DEFAULT_CONNECTION_DIRECTIVE_NAME,
        help="Name of the directive that marks connection fields (without the \
             leading `@`).",
        long,
    )]
    directive_name: String,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Write the transformed schema to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which together make up the schema to transform.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl TransformCmd {
    fn config(&self) -> ConnectionConfig {
        let config = ConnectionConfig::new()
            .with_directive_name(self.directive_name.as_str());

        if self.cache_hints {
            config.with_cache_hints(CacheHintConfig::new(
                self.cache_hint_directive.as_str(),
                self.cache_hint_argument.as_str(),
            ))
        } else {
            config
        }
    }

    /// Every matching file at or under each input path, sorted per input path
    /// so the loaded definition order doesn't depend on the filesystem.
    fn find_schema_files(&self) -> Result<Vec<PathBuf>, walkdir::Error> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );

        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is loaded regardless of its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                if has_graphql_ext(entry_path, &graphql_file_exts) {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                }
            }
        }

        Ok(file_paths)
    }
}

#[inherent::inherent]
impl RunnableCommand for TransformCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.find_schema_files() {
            Ok(file_paths) => file_paths,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to search for schema files: {e}",
                output_utils::RED_X,
            )),
        };

        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found under {:?}.",
                output_utils::RED_X,
                self.file_or_dir_paths,
            ));
        }

        log::debug!("Found {} GraphQL files to transform.", file_paths.len());

        let transformed = ConnectionTransformer::new(self.config())
            .load_files(file_paths.clone())
            .and_then(|transformer| transformer.transform());

        let transformed = match transformed {
            Ok(transformed) => transformed,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to transform the schema: {e}",
                output_utils::RED_X,
            )),
        };

        log::info!(
            "{} Transformed {} files: rewrote {} connection fields and \
            generated {} types.",
            output_utils::GREEN_CHECK,
            file_paths.len(),
            transformed.rewritten_fields().len(),
            transformed.synthesized_type_names().len(),
        );

        let sdl = transformed.to_sdl();
        match &self.output {
            Some(output_path) => match std::fs::write(output_path, sdl) {
                Ok(()) => {
                    log::info!("Wrote the transformed schema to {output_path:?}.");
                    CommandResult::silent_success()
                },
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to write {output_path:?}: {e}",
                    output_utils::RED_X,
                )),
            },
            None => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
        }
    }
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}
