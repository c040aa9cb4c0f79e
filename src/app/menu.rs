/// Numbered entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddUser,
    DeleteUser,
    Save,
    Load,
    List,
    Export,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddUser,
        MenuChoice::DeleteUser,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::List,
        MenuChoice::Export,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| i64::from(choice.number()) == number)
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddUser => 1,
            MenuChoice::DeleteUser => 2,
            MenuChoice::Save => 3,
            MenuChoice::Load => 4,
            MenuChoice::List => 5,
            MenuChoice::Export => 6,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddUser => "Add user",
            MenuChoice::DeleteUser => "Delete user",
            MenuChoice::Save => "Save users to file (binary snapshot)",
            MenuChoice::Load => "Load users from file",
            MenuChoice::List => "List users",
            MenuChoice::Export => "Export users to .txt",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub const OPTION_PROMPT: &str = "Select an option: ";

pub fn render_menu() -> String {
    let rule = "------------------------------------------";
    let mut text = format!("{rule}\n=== USER MANAGEMENT MENU ===\n{rule}\n");
    for choice in MenuChoice::ALL {
        if choice == MenuChoice::Exit {
            text.push('\n');
        }
        text.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    text.push('\n');
    text.push_str(OPTION_PROMPT);
    text
}
