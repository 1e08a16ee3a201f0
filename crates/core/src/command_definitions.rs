use std::fmt::{Display, Formatter};
use std::path::Path;

use log::debug;

/// A package-manager lifecycle command offered in the maintenance checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceCommand {
    pub name: &'static str,
    pub command: &'static str,
    /// Only offered when the project has a test directory
    pub requires_tests: bool,
}

/// Every maintenance command, in checklist order.
pub const MAINTENANCE_COMMANDS: [MaintenanceCommand; 5] = [
    MaintenanceCommand {
        name: "update",
        command: "poetry update",
        requires_tests: false,
    },
    MaintenanceCommand {
        name: "lock",
        command: "poetry lock",
        requires_tests: false,
    },
    MaintenanceCommand {
        name: "install",
        command: "poetry install",
        requires_tests: false,
    },
    MaintenanceCommand {
        name: "show_tree",
        command: "poetry show --tree",
        requires_tests: false,
    },
    MaintenanceCommand {
        name: "pytest",
        command: "poetry run pytest",
        requires_tests: true,
    },
];

impl MaintenanceCommand {
    /// Finds a maintenance command by name.
    pub fn by_name(name: &str) -> Option<&'static MaintenanceCommand> {
        MAINTENANCE_COMMANDS.iter().find(|c| c.name == name)
    }
}

impl Display for MaintenanceCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.command)
    }
}

/// The maintenance commands applicable to a project.
///
/// The test runner is left out when `project_dir` has no `test_directory`
/// subfolder.
pub fn available_maintenance_commands(
    project_dir: &Path,
    test_directory: &str,
) -> Vec<&'static MaintenanceCommand> {
    let has_tests = project_dir.join(test_directory).is_dir();
    debug!(
        "Test directory `{}` present: {}",
        project_dir.join(test_directory).display(),
        has_tests
    );

    MAINTENANCE_COMMANDS
        .iter()
        .filter(|c| has_tests || !c.requires_tests)
        .collect()
}
