mod directive;
mod transform;

use crate::Cli;
use crate::CommandResult;
use directive::DirectiveCmd;
use transform::TransformCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-connection")]
pub(crate) enum CommandEnum {
    /// Print the SDL declaration of the connection marker directive.
    Directive(DirectiveCmd),

    /// Apply the connection transform to one or more schema files.
    Transform(Box<TransformCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Directive(cmd) => cmd.run(cli).await,
            Self::Transform(cmd) => cmd.run(cli).await,
        }
    }
}
