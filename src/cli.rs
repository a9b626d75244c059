use anyhow::Result;

#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Generate { policy: String, request: String },
    Policies,
    Check,
    Help,
    Version,
}

pub fn version_text() -> String {
    format!("confgen {}", env!("CARGO_PKG_VERSION"))
}

pub fn usage_text() -> String {
    format!(
        "{version}
ConfGen — AI Network Configuration Assistant

Usage:
  confgen generate --policy <NAME> --request <TEXT>
  confgen policies
  confgen check
  confgen --help
  confgen --version

Options:
  -p, --policy <NAME>   Network policy used as generation context
  -r, --request <TEXT>  Description of the desired device configuration
  -h, --help            Show this help text
  -V, --version         Show version",
        version = version_text()
    )
}

pub fn parse_cli_args<I, S>(args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = args.into_iter();
    let _program_name = iter.next();

    let mut command: Option<String> = None;
    let mut policy: Option<String> = None;
    let mut request: Option<String> = None;

    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "generate" | "policies" | "check" => {
                if command.as_deref().is_some_and(|existing| existing != arg) {
                    return Err(anyhow::anyhow!(
                        "Multiple commands provided. Use only one command.\n\n{}",
                        usage_text()
                    ));
                }
                command = Some(arg.to_string());
            }
            "-p" | "--policy" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("Missing value for --policy.\n\n{}", usage_text())
                })?;
                policy = Some(value.as_ref().to_string());
            }
            "-r" | "--request" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("Missing value for --request.\n\n{}", usage_text())
                })?;
                request = Some(value.as_ref().to_string());
            }
            _ if arg.starts_with("--policy=") => {
                let value = arg.split_once('=').map(|(_, v)| v).unwrap_or_default();
                if value.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Missing value for --policy.\n\n{}",
                        usage_text()
                    ));
                }
                policy = Some(value.to_string());
            }
            _ if arg.starts_with("--request=") => {
                let value = arg.split_once('=').map(|(_, v)| v).unwrap_or_default();
                if value.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Missing value for --request.\n\n{}",
                        usage_text()
                    ));
                }
                request = Some(value.to_string());
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown argument: {arg}\n\n{}",
                    usage_text()
                ));
            }
        }
    }

    let command = match command {
        Some(command) => command,
        // Bare flags imply generate; a bare invocation shows usage.
        None if policy.is_some() || request.is_some() => "generate".to_string(),
        None => return Ok(CliCommand::Help),
    };

    match command.as_str() {
        "generate" => {
            let policy = policy.ok_or_else(|| {
                anyhow::anyhow!("Missing --policy for generate.\n\n{}", usage_text())
            })?;
            let request = request.ok_or_else(|| {
                anyhow::anyhow!("Missing --request for generate.\n\n{}", usage_text())
            })?;
            if request.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "Please provide a configuration request.\n\n{}",
                    usage_text()
                ));
            }
            Ok(CliCommand::Generate { policy, request })
        }
        "policies" => {
            if policy.is_some() || request.is_some() {
                return Err(anyhow::anyhow!(
                    "--policy/--request are only valid with generate.\n\n{}",
                    usage_text()
                ));
            }
            Ok(CliCommand::Policies)
        }
        "check" => {
            if policy.is_some() || request.is_some() {
                return Err(anyhow::anyhow!(
                    "--policy/--request are not valid with check.\n\n{}",
                    usage_text()
                ));
            }
            Ok(CliCommand::Check)
        }
        _ => unreachable!(),
    }
}
