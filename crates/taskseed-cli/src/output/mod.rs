use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a run summary unless `--quiet` was given. Returns whether it printed.
pub fn report<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<bool> {
    if flags.quiet {
        return Ok(false);
    }
    output(value, flags.format)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_is_single_line() {
        let value = json!({"seed": 7, "sinks": ["a", "b"]});
        let raw = render(&value, OutputFormat::Raw).unwrap();
        assert!(!raw.contains('\n'));
        let pretty = render(&value, OutputFormat::Json).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&raw).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn quiet_suppresses_reports() {
        let value = json!({"seed": 7});
        let quiet = GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
        };
        assert!(!report(&value, &quiet).unwrap());

        let loud = GlobalFlags {
            format: OutputFormat::Raw,
            quiet: false,
        };
        assert!(report(&value, &loud).unwrap());
    }
}
