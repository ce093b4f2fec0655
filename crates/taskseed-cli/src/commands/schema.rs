use taskseed_core::documents::DocumentKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `taskseed schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind: DocumentKind = args.document.parse()?;
    output(&kind.schema(), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: false,
        }
    }

    #[test]
    fn known_documents_print_their_schema() {
        for document in ["categories", "priorities", "tasks"] {
            let args = SchemaArgs {
                document: document.to_owned(),
            };
            handle(&args, &flags()).expect("schema prints");
        }
    }

    #[test]
    fn unknown_document_is_rejected() {
        let args = SchemaArgs {
            document: "projects".to_owned(),
        };
        let error = handle(&args, &flags()).unwrap_err();
        assert!(error.to_string().contains("projects"), "{error}");
    }
}
