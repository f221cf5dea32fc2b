use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_connection::DEFAULT_CONNECTION_DIRECTIVE_NAME;

#[derive(Debug, clap::Args)]
pub(crate) struct DirectiveCmd {
    #[arg(
        default_value=DEFAULT_CONNECTION_DIRECTIVE_NAME,
        help="Name of the marker directive (without the leading `@`).",
        long,
    )]
    directive_name: String,
}

#[inherent::inherent]
impl RunnableCommand for DirectiveCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::stdout(format_args!(
            "{}",
            libgraphql_connection::connection_directive_declaration(
                self.directive_name.as_str(),
            ),
        ))
    }
}
