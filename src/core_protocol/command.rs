use std::fmt;

/// Commands issued by the client, named after their wire verbs.
#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    QUIT,
    TYPE,
    MODE,
    STRU,
    PASV,
    LIST,
    RETR,
    STOR,
    DELE,
    MKD,
    RMD,
}

impl FtpCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            FtpCommand::USER => "USER",
            FtpCommand::PASS => "PASS",
            FtpCommand::QUIT => "QUIT",
            FtpCommand::TYPE => "TYPE",
            FtpCommand::MODE => "MODE",
            FtpCommand::STRU => "STRU",
            FtpCommand::PASV => "PASV",
            FtpCommand::LIST => "LIST",
            FtpCommand::RETR => "RETR",
            FtpCommand::STOR => "STOR",
            FtpCommand::DELE => "DELE",
            FtpCommand::MKD => "MKD",
            FtpCommand::RMD => "RMD",
        }
    }

    pub fn from_str(cmd: &str) -> Option<FtpCommand> {
        match cmd.to_ascii_uppercase().as_str() {
            "USER" => Some(FtpCommand::USER),
            "PASS" => Some(FtpCommand::PASS),
            "QUIT" => Some(FtpCommand::QUIT),
            "TYPE" => Some(FtpCommand::TYPE),
            "MODE" => Some(FtpCommand::MODE),
            "STRU" => Some(FtpCommand::STRU),
            "PASV" => Some(FtpCommand::PASV),
            "LIST" => Some(FtpCommand::LIST),
            "RETR" => Some(FtpCommand::RETR),
            "STOR" => Some(FtpCommand::STOR),
            "DELE" => Some(FtpCommand::DELE),
            "MKD" => Some(FtpCommand::MKD),
            "RMD" => Some(FtpCommand::RMD),
            _ => None,
        }
    }
}

impl fmt::Display for FtpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb plus its optional argument, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: FtpCommand,
    pub arg: Option<String>,
}

impl Command {
    pub fn new(verb: FtpCommand) -> Self {
        Self { verb, arg: None }
    }

    /// An empty argument is treated as no argument at all.
    pub fn with_arg(verb: FtpCommand, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        Self {
            verb,
            arg: if arg.is_empty() { None } else { Some(arg) },
        }
    }

    /// Wire form, CRLF included.
    pub fn to_line(&self) -> String {
        encode(self.verb.as_str(), self.arg.as_deref())
    }

    /// Splits a received command line back into verb and argument.
    ///
    /// Only the first space separates the verb, so arguments keep their inner spaces.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (line, None),
        };
        let verb = FtpCommand::from_str(verb)?;
        Some(match arg {
            Some(arg) => Command::with_arg(verb, arg),
            None => Command::new(verb),
        })
    }
}

/// Produces `VERB ARG\r\n`, or `VERB\r\n` without an argument.
///
/// Nothing is escaped: callers must not embed CR or LF in either part.
pub fn encode(verb: &str, arg: Option<&str>) -> String {
    match arg {
        Some(arg) if !arg.is_empty() => format!("{} {}\r\n", verb, arg),
        _ => format!("{}\r\n", verb),
    }
}
