use std::collections::HashMap;
use std::time::{Duration, Instant};

use gemitrace_stream::state::StreamState;

use crate::console::Console;

/// Output from a command execution.
pub enum CommandOutput {
    /// Lines to display in the console.
    Lines(Vec<String>),
    /// Signal that the app should quit.
    Quit,
    /// Signal that the app should start a compliance audit.
    TriggerAudit,
}

/// Context available to commands during execution.
pub struct CommandContext<'a> {
    pub console: &'a mut Console,
    pub stream: &'a StreamState,
    pub feed_interval: Duration,
    pub started_at: Instant,
}

/// A console command.
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str;
    fn usage(&self) -> &str { self.name() }
    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput;
}

/// Registry of console commands.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    lookup: HashMap<String, usize>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let idx = self.commands.len();
        self.lookup.insert(cmd.name().to_string(), idx);
        for alias in cmd.aliases() {
            self.lookup.insert(alias.to_string(), idx);
        }
        self.commands.push(cmd);
    }

    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandOutput {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return CommandOutput::Lines(vec![]);
        }

        let name = parts[0];
        let args = &parts[1..];

        match self.lookup.get(name) {
            Some(&idx) => self.commands[idx].execute(args, ctx),
            None => CommandOutput::Lines(vec![
                format!("unknown command: '{}'. Type 'help' for available commands.", name),
            ]),
        }
    }

    pub fn commands(&self) -> &[Box<dyn Command>] {
        &self.commands
    }
}

// ── Built-in commands ──

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str { "help" }
    fn aliases(&self) -> &[&str] { &["?"] }
    fn description(&self) -> &str { "List commands or show specific help" }
    fn usage(&self) -> &str { "help [command]" }

    fn execute(&self, args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        // Note: we can't access the CommandRegistry from inside a command easily,
        // so help with args is handled specially by the caller. This returns generic help.
        if !args.is_empty() {
            return CommandOutput::Lines(vec![
                format!("help for '{}' — use 'help' to list all commands", args[0]),
            ]);
        }
        // Placeholder — the real help list is injected by the caller
        CommandOutput::Lines(vec!["Type 'help' to list all commands.".into()])
    }
}

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str { "clear" }
    fn aliases(&self) -> &[&str] { &["cls"] }
    fn description(&self) -> &str { "Clear console log" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        ctx.console.clear_logs();
        CommandOutput::Lines(vec![])
    }
}

pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str { "quit" }
    fn aliases(&self) -> &[&str] { &["exit", "q"] }
    fn description(&self) -> &str { "Exit GemiTrace" }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Quit
    }
}

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &str { "uptime" }
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str { "Show session uptime" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let elapsed = ctx.started_at.elapsed();
        let secs = elapsed.as_secs();
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        let s = secs % 60;
        CommandOutput::Lines(vec![format!("Uptime: {:02}:{:02}:{:02}", hours, mins, s)])
    }
}

pub struct StatsCommand;

impl Command for StatsCommand {
    fn name(&self) -> &str { "stats" }
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str { "Show dashboard statistics" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let stats = ctx.stream.stats();
        CommandOutput::Lines(vec![
            format!("Total events:          {}", stats.total_events),
            format!("Critical errors:       {}", stats.critical_errors),
            format!("Compliance violations: {}", stats.compliance_violations),
            format!("System uptime:         {}", stats.system_uptime),
        ])
    }
}

pub struct FeedCommand;

impl Command for FeedCommand {
    fn name(&self) -> &str { "feed" }
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str { "Show live feed status" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Lines(vec![
            format!("Feed interval: {}ms", ctx.feed_interval.as_millis()),
            format!("Buffered events: {}", ctx.stream.len()),
        ])
    }
}

pub struct AuditCommand;

impl Command for AuditCommand {
    fn name(&self) -> &str { "audit" }
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str { "Run an AI compliance audit on recent events" }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::TriggerAudit
    }
}

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &str { "echo" }
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str { "Print message to console" }
    fn usage(&self) -> &str { "echo <message>" }

    fn execute(&self, args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Lines(vec![args.join(" ")])
    }
}

/// Create a CommandRegistry pre-loaded with all built-in commands.
pub fn builtin_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    reg.register(Box::new(HelpCommand));
    reg.register(Box::new(ClearCommand));
    reg.register(Box::new(QuitCommand));
    reg.register(Box::new(UptimeCommand));
    reg.register(Box::new(StatsCommand));
    reg.register(Box::new(FeedCommand));
    reg.register(Box::new(AuditCommand));
    reg.register(Box::new(EchoCommand));
    reg
}
