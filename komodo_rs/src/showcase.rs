//! Content of the scroll-driven feature showcase.

/// Accent of a highlight chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Blue,
}

impl Tone {
    /// CSS modifier class for the chip.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Green => "chip-green",
            Tone::Yellow => "chip-yellow",
            Tone::Blue => "chip-blue",
        }
    }
}

/// Floating stat chip next to the demo terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// Canned command and output shown in a feature's demo terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSession {
    pub command: &'static str,
    pub output: &'static [&'static str],
}

/// One tab of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub tab: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub demo: DemoSession,
    pub highlights: &'static [Highlight],
}

impl Feature {
    /// Element id of the feature's copy block, e.g. `feature-detect`.
    pub fn anchor(&self) -> String {
        format!("feature-{}", self.id)
    }
}

/// Words that get the accent color in feature titles.
pub const TITLE_KEYWORDS: [&str; 6] = [
    "hardware",
    "language",
    "rollback",
    "Automatic",
    "Natural",
    "Instant",
];

/// Splits a title into words, flagging those that contain a keyword
/// (case-insensitive).
pub fn highlight_title(title: &str) -> Vec<(&str, bool)> {
    title
        .split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let hit = TITLE_KEYWORDS
                .iter()
                .any(|k| lower.contains(&k.to_lowercase()));
            (word, hit)
        })
        .collect()
}

/// True for output lines rendered in the accent color.
pub fn is_success_line(line: &str) -> bool {
    line.starts_with("  ✓")
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        id: "detect",
        tab: "DETECT",
        badge: "HARDWARE",
        title: "Automatic hardware detection",
        description: "Komodo scans your system to identify GPU, CPU, and available accelerators. It then selects the optimal package versions for your specific hardware configuration.",
        demo: DemoSession {
            command: "komodo detect",
            output: &[
                "[HARDWARE DETECTION]",
                "",
                "  OS:           macOS 14.2 (Darwin)",
                "  Architecture: ARM64 (Apple Silicon)",
                "  CPU:          Apple M2 Pro (12 cores)",
                "  Memory:       32 GB",
                "  GPU:          Apple M2 Pro (19-core GPU)",
                "  Metal:        Supported ✓",
                "  CUDA:         Not available",
            ],
        },
        highlights: &[
            Highlight {
                label: "GPU Detected",
                value: "M2 Pro 19-core",
                tone: Tone::Green,
            },
            Highlight {
                label: "Accelerator",
                value: "Metal MPS",
                tone: Tone::Blue,
            },
            Highlight {
                label: "Optimization",
                value: "ARM64 Native",
                tone: Tone::Yellow,
            },
        ],
    },
    Feature {
        id: "install",
        tab: "INSTALL",
        badge: "INTENT-BASED",
        title: "Natural language installation",
        description: "Describe what you want to build in plain English. Komodo parses your intent, resolves dependencies, and installs hardware-optimized packages automatically.",
        demo: DemoSession {
            command: "komodo install \"train a vision model\"",
            output: &[
                "[PARSING INTENT] \"train a vision model\"",
                "",
                "Detected requirements:",
                "  • Primary: Computer Vision / Deep Learning",
                "  • Runtime: Python 3.11",
                "  • Framework: PyTorch + torchvision",
                "",
                "[INSTALLING]",
                "  ✓ torch-2.1.0+metal",
                "  ✓ torchvision-0.16.0",
                "  ✓ pillow-10.1.0",
                "  ✓ opencv-python-4.8.1",
            ],
        },
        highlights: &[
            Highlight {
                label: "Packages",
                value: "12 installed",
                tone: Tone::Green,
            },
            Highlight {
                label: "Conflicts",
                value: "0 detected",
                tone: Tone::Green,
            },
            Highlight {
                label: "Time",
                value: "8.2 seconds",
                tone: Tone::Blue,
            },
        ],
    },
    Feature {
        id: "rollback",
        tab: "ROLLBACK",
        badge: "SAFETY",
        title: "Instant environment rollback",
        description: "Every change creates a snapshot. Made a mistake or broke something? Roll back to any previous state instantly with a single command.",
        demo: DemoSession {
            command: "komodo rollback --list",
            output: &[
                "[AVAILABLE SNAPSHOTS]",
                "",
                "  #4  10 min ago   Added opencv, pillow",
                "  #3  2 hours ago  Installed pytorch, torchvision",
                "  #2  1 day ago    Installed numpy, pandas",
                "  #1  3 days ago   Initial environment",
                "",
                "Run: komodo rollback <id>",
                "Or:  komodo rollback (undo last)",
            ],
        },
        highlights: &[
            Highlight {
                label: "Snapshots",
                value: "4 available",
                tone: Tone::Blue,
            },
            Highlight {
                label: "Storage",
                value: "124 MB",
                tone: Tone::Yellow,
            },
            Highlight {
                label: "Restore time",
                value: "< 1 sec",
                tone: Tone::Green,
            },
        ],
    },
];
