//! Command registry for the simulated terminal.
//!
//! A submitted line goes through one classification step ([`Command::classify`])
//! and the resulting variant decides the response ([`Command::resolve`]).
//! Nothing here executes anything: every response is canned text.

/// Verb phrase of the install prefix rule.
pub const INSTALL_VERB: &str = "komodo install";
/// Verb phrase of the create prefix rule.
pub const CREATE_VERB: &str = "komodo create";

/// Hint line appended to every "command not found" response.
pub const NOT_FOUND_HINT: &str = "Type \"komodo\" to see available commands.";

/// Commands answered from the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticCommand {
    Komodo,
    InstallUsage,
    CreateUsage,
    Detect,
    Rollback,
    Health,
    List,
    Help,
}

impl StaticCommand {
    /// Every static entry, in table order.
    pub const ALL: [StaticCommand; 8] = [
        StaticCommand::Komodo,
        StaticCommand::InstallUsage,
        StaticCommand::CreateUsage,
        StaticCommand::Detect,
        StaticCommand::Rollback,
        StaticCommand::Health,
        StaticCommand::List,
        StaticCommand::Help,
    ];

    /// Normalized key this entry is registered under.
    pub fn key(self) -> &'static str {
        match self {
            StaticCommand::Komodo => "komodo",
            StaticCommand::InstallUsage => INSTALL_VERB,
            StaticCommand::CreateUsage => CREATE_VERB,
            StaticCommand::Detect => "komodo detect",
            StaticCommand::Rollback => "komodo rollback",
            StaticCommand::Health => "komodo health",
            StaticCommand::List => "komodo list",
            StaticCommand::Help => "help",
        }
    }

    /// Canned response text.
    pub fn output(self) -> &'static str {
        match self {
            StaticCommand::Komodo => KOMODO_TEXT,
            StaticCommand::InstallUsage => INSTALL_USAGE_TEXT,
            StaticCommand::CreateUsage => CREATE_USAGE_TEXT,
            StaticCommand::Detect => DETECT_TEXT,
            StaticCommand::Rollback => ROLLBACK_TEXT,
            StaticCommand::Health => HEALTH_TEXT,
            StaticCommand::List => LIST_TEXT,
            StaticCommand::Help => HELP_TEXT,
        }
    }

    fn lookup(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.key() == normalized)
    }
}

/// Result of classifying one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exact match in the static table.
    Static(StaticCommand),
    /// `komodo install <intent>`
    Install { intent: String },
    /// `komodo create <intent>`
    Create { intent: String },
    /// Reserved: empties the log, appends nothing.
    Clear,
    /// Anything else. Carries the line exactly as typed.
    Unknown { input: String },
}

/// What the terminal should do with a classified command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Append an entry with this output.
    Output(String),
    /// Empty the log.
    Clear,
}

/// Trims and lower-cases a line for table lookup.
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

impl Command {
    /// Classifies a raw line. Exact entries win over prefix rules, prefix
    /// rules win over the fallback.
    pub fn classify(line: &str) -> Command {
        let normalized = normalize(line);

        if normalized == "clear" {
            return Command::Clear;
        }
        if let Some(cmd) = StaticCommand::lookup(&normalized) {
            return Command::Static(cmd);
        }
        if let Some(intent) = extract_intent(line, &normalized, INSTALL_VERB) {
            return Command::Install { intent };
        }
        if let Some(intent) = extract_intent(line, &normalized, CREATE_VERB) {
            return Command::Create { intent };
        }

        Command::Unknown {
            input: line.to_string(),
        }
    }

    /// Produces the response for this command.
    pub fn resolve(&self) -> Resolution {
        match self {
            Command::Static(cmd) => Resolution::Output(cmd.output().to_string()),
            Command::Install { intent } => Resolution::Output(install_report(intent)),
            Command::Create { intent } => Resolution::Output(create_report(intent)),
            Command::Clear => Resolution::Clear,
            Command::Unknown { input } => {
                Resolution::Output(format!("Command not found: {input}\n{NOT_FOUND_HINT}"))
            }
        }
    }
}

/// Returns the intent argument when `normalized` starts with `verb` and has
/// something after it. The intent keeps the user's casing where the verb
/// prefix can be located in the raw line.
fn extract_intent(raw: &str, normalized: &str, verb: &str) -> Option<String> {
    if !normalized.starts_with(verb) || normalized.len() <= verb.len() {
        return None;
    }

    let trimmed = raw.trim();
    let remainder = match trimmed.get(..verb.len()) {
        Some(head) if head.eq_ignore_ascii_case(verb) => &trimmed[verb.len()..],
        // Lower-casing changed byte offsets; fall back to the normalized text.
        _ => &normalized[verb.len()..],
    };

    Some(remainder.trim().trim_matches('"').to_string())
}

fn install_report(intent: &str) -> String {
    format!(
        r#"
[PARSING INTENT] "{intent}"

Detected requirements:
  • Primary: Machine Learning / AI
  • Runtime: Python 3.11
  • Framework: PyTorch (GPU-optimized)

[HARDWARE DETECTION]
  → Apple Silicon M2 Pro detected
  → Metal Performance Shaders available
  → Selecting optimized packages...

[INSTALLING]
  ✓ Created virtual environment (.venv)
  ✓ torch-2.1.0+metal (Metal acceleration)
  ✓ torchvision-0.16.0
  ✓ numpy-1.26.0 (Accelerate framework)
  ✓ transformers-4.35.0
  ✓ accelerate-0.24.0

[SNAPSHOT] Created rollback point #4

Done! Installed 6 packages in 12.3s
Activate with: source .venv/bin/activate
"#
    )
}

fn create_report(intent: &str) -> String {
    format!(
        r#"
[PARSING INTENT] "{intent}"

Detected project type:
  • Type: Web Application
  • Framework: Next.js 14
  • Language: TypeScript

[SCAFFOLDING PROJECT]
  ✓ Created project structure
  ✓ Initialized package.json
  ✓ Installing dependencies...
  ✓ next@14.0.0
  ✓ react@18.2.0
  ✓ typescript@5.2.0
  ✓ tailwindcss@3.3.0
  ✓ Configured TypeScript
  ✓ Set up Tailwind CSS
  ✓ Created initial pages

[SNAPSHOT] Created rollback point #5

Done! Project created in ./my-project
Run: cd my-project && npm run dev
"#
    )
}

// ============================================================================
// Static responses
// ============================================================================

const KOMODO_TEXT: &str = r#"
[AVAILABLE COMMANDS]

  komodo install <intent>    Set up environment based on intent
  komodo create <intent>     Create new project with intent
  komodo detect              Show detected hardware
  komodo rollback            Undo last installation
  komodo health              Check environment health
  komodo list                List installed packages
  clear                      Clear terminal screen

[EXAMPLES]
  komodo install "train an AI model"
  komodo create "build a website with React"
  komodo install "data analysis with pandas"
"#;

const INSTALL_USAGE_TEXT: &str = r#"
[USAGE] komodo install "<intent>"

Describe what you want to build and Komodo will:
  • Parse your intent and detect required packages
  • Detect your hardware (GPU, CPU, memory)
  • Install hardware-optimized versions
  • Create isolated virtual environment
  • Generate lockfile for reproducibility

[EXAMPLES]
  komodo install "machine learning with pytorch"
  komodo install "web scraping"
  komodo install "REST API with FastAPI"
  komodo install "data visualization"
"#;

const CREATE_USAGE_TEXT: &str = r#"
[USAGE] komodo create "<intent>"

Create a new project with the right structure and dependencies.

[EXAMPLES]
  komodo create "Next.js website with authentication"
  komodo create "Python CLI tool"
  komodo create "FastAPI backend with PostgreSQL"
  komodo create "React Native mobile app"

Komodo will scaffold the project, install dependencies,
and configure everything based on your hardware.
"#;

const DETECT_TEXT: &str = r#"
[HARDWARE DETECTION]

  OS:           macOS 14.2 (Darwin)
  Architecture: ARM64 (Apple Silicon)
  CPU:          Apple M2 Pro (12 cores)
  Memory:       32 GB
  GPU:          Apple M2 Pro (19-core GPU)
  Metal:        Supported ✓
  CUDA:         Not available

[OPTIMIZATION NOTES]
  • PyTorch will use Metal Performance Shaders
  • TensorFlow will use tensorflow-metal plugin
  • llama-cpp will compile with Metal acceleration
  • NumPy/SciPy will use Accelerate framework
"#;

const ROLLBACK_TEXT: &str = r#"
[ROLLBACK SYSTEM]

Komodo creates snapshots before every change.

  komodo rollback           Undo last change
  komodo rollback --list    Show available snapshots
  komodo rollback <id>      Restore specific snapshot

[RECENT SNAPSHOTS]
  #3  2 hours ago    Installed pytorch, torchvision
  #2  1 day ago      Installed numpy, pandas, matplotlib
  #1  3 days ago     Initial environment setup

Type "komodo rollback" to undo the last change.
"#;

const HEALTH_TEXT: &str = r#"
[ENVIRONMENT HEALTH CHECK]

Scanning installed packages...

✓ No version conflicts detected
✓ All dependencies satisfied
✓ No security vulnerabilities found
✓ Lock file is up to date

[INSTALLED PACKAGES] 47 packages
[VIRTUAL ENV] .venv (Python 3.11.5)
[DISK USAGE] 1.2 GB

Environment is healthy!
"#;

const LIST_TEXT: &str = r#"
[INSTALLED PACKAGES]

Python Environment (.venv)
──────────────────────────
  torch          2.1.0+metal    (GPU-optimized)
  torchvision    0.16.0
  numpy          1.26.0         (Accelerate)
  pandas         2.1.1
  matplotlib     3.8.0
  scikit-learn   1.3.1
  transformers   4.35.0
  accelerate     0.24.0

  ... and 39 more packages

Total: 47 packages | Size: 1.2 GB
"#;

const HELP_TEXT: &str = r#"
Type "komodo" to see all available commands.
"#;
