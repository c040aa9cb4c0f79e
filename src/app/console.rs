use crate::app::menu::{self, MenuChoice, OPTION_PROMPT};
use crate::core::session::UserSession;
use crate::core::{ConfigProvider, Storage, User};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{
    validate_address, validate_birth_year, validate_identifier, validate_secret,
};
use std::io::{BufRead, Write};

/// Interactive menu driver over any line-based input and any output.
pub struct Console<S: Storage, C: ConfigProvider, R: BufRead, W: Write> {
    session: UserSession<S, C>,
    input: R,
    output: W,
}

impl<S: Storage, C: ConfigProvider, R: BufRead, W: Write> Console<S, C, R, W> {
    pub fn new(session: UserSession<S, C>, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &UserSession<S, C> {
        &self.session
    }

    pub fn into_parts(self) -> (UserSession<S, C>, W) {
        (self.session, self.output)
    }

    /// Runs the startup load and then the menu until exit is confirmed or
    /// the input ends.
    pub fn run(&mut self) -> Result<()> {
        let result = self.startup().and_then(|_| self.menu_loop());
        match result {
            Ok(()) => {}
            Err(RegistryError::InputClosed) => {
                tracing::debug!("Input closed, leaving the menu");
                writeln!(self.output)?;
            }
            Err(e) => return Err(e),
        }
        writeln!(self.output, "\nProgram finished.")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn startup(&mut self) -> Result<()> {
        if !self.session.config().autoload() {
            writeln!(self.output, "Autoload disabled. The list starts empty.\n")?;
            return Ok(());
        }

        if self.session.snapshot_exists() {
            writeln!(self.output, "Data file found. Loading users...\n")?;
            self.load_data()
        } else {
            writeln!(self.output, "No previous data file. The list starts empty.\n")?;
            Ok(())
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", menu::render_menu())?;
            self.output.flush()?;

            let number = self.read_choice()?;
            tracing::debug!("Menu choice: {}", number);

            match MenuChoice::from_number(number) {
                Some(choice) => {
                    if self.dispatch(choice)? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "Invalid option.\n")?,
            }
        }
    }

    fn read_choice(&mut self) -> Result<i64> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(number) => return Ok(number),
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number.\n")?;
                    write!(self.output, "{}", OPTION_PROMPT)?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Runs one menu entry and returns whether the program should exit.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::AddUser => self.add_user()?,
            MenuChoice::DeleteUser => self.delete_user()?,
            MenuChoice::Save => self.save_data()?,
            MenuChoice::Load => self.load_data()?,
            MenuChoice::List => self.list_users()?,
            MenuChoice::Export => self.export_text()?,
            MenuChoice::Exit => return self.confirm_exit(),
        }
        Ok(false)
    }

    /// Asks for every field until it is valid, then stores the new user.
    pub fn add_user(&mut self) -> Result<()> {
        self.banner("ADD USER")?;

        let identifier = loop {
            let value = self.prompt("Enter the identifier (4 digits and 1 letter): ")?;
            if let Err(e) = validate_identifier(&value) {
                tracing::debug!("Rejected identifier: {}", e);
                writeln!(self.output, "Error: the identifier must be 4 digits and 1 letter.\n")?;
                continue;
            }
            if self.session.contains(&value) {
                tracing::debug!("Rejected duplicate identifier {}", value);
                writeln!(self.output, "Error: a user with that identifier already exists.\n")?;
                continue;
            }
            break value;
        };

        let secret = loop {
            let value = self.prompt("Enter the secret (6 characters): ")?;
            match validate_secret(&value) {
                Ok(()) => break value,
                Err(e) => {
                    tracing::debug!("Rejected secret: {}", e);
                    writeln!(self.output, "Error: invalid length.\n")?;
                }
            }
        };

        let birth_year = loop {
            let value = self.prompt("Enter the birth year (4 digits): ")?;
            match validate_birth_year(&value) {
                Ok(year) => break year,
                Err(e) => {
                    tracing::debug!("Rejected birth year: {}", e);
                    writeln!(self.output, "Valid example: 1998\n")?;
                }
            }
        };

        let address = loop {
            let value = self.prompt("Enter the address (e.g. Calle Real Betis Balompié 116): ")?;
            match validate_address(&value) {
                Ok(()) => break value,
                Err(e) => {
                    tracing::debug!("Rejected address: {}", e);
                    writeln!(self.output, "Invalid format. Example: Calle Los Olivos 42\n")?;
                }
            }
        };

        match self
            .session
            .add_user(User::new(identifier, secret, address, birth_year))
        {
            Ok(()) => writeln!(self.output, "\nUser added successfully.\n")?,
            Err(e) => writeln!(self.output, "\nError: {}\n", e.user_friendly_message())?,
        }
        Ok(())
    }

    pub fn delete_user(&mut self) -> Result<()> {
        self.banner("DELETE USER")?;

        if self.session.users().is_empty() {
            writeln!(self.output, "No users registered.\n")?;
            return Ok(());
        }

        let identifier = self.prompt("Enter the identifier of the user to delete: ")?;
        if self.session.delete_user(&identifier) > 0 {
            writeln!(self.output, "User deleted successfully.\n")?;
        } else {
            writeln!(self.output, "No user found with that identifier.\n")?;
        }
        Ok(())
    }

    pub fn save_data(&mut self) -> Result<()> {
        self.banner("SAVE DATA")?;

        match self.session.save() {
            Ok(_) => writeln!(self.output, "Data saved successfully.\n")?,
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                writeln!(self.output, "Error saving the data: {}\n", e.user_friendly_message())?;
            }
        }
        Ok(())
    }

    pub fn load_data(&mut self) -> Result<()> {
        self.banner("LOAD SAVED DATA")?;

        if !self.session.snapshot_exists() {
            writeln!(
                self.output,
                "Data file {} not found.\n",
                self.session.config().data_file()
            )?;
            return Ok(());
        }

        if self.session.is_dirty()
            && !self.confirm("There are unsaved changes. Continue and lose them? (Y/N): ")?
        {
            writeln!(self.output, "Operation cancelled.\n")?;
            return Ok(());
        }

        match self.session.load() {
            Ok(summary) => writeln!(
                self.output,
                "Data loaded successfully ({} users, saved {}).\n",
                summary.user_count,
                summary.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
            )?,
            Err(e) => {
                tracing::warn!("Load failed: {}", e);
                writeln!(self.output, "Error loading the data: {}\n", e.user_friendly_message())?;
            }
        }
        Ok(())
    }

    pub fn list_users(&mut self) -> Result<()> {
        self.banner("USER LIST")?;

        if self.session.users().is_empty() {
            writeln!(self.output, "No users registered.\n")?;
            return Ok(());
        }

        for user in self.session.users() {
            writeln!(self.output, "{}", user)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    pub fn export_text(&mut self) -> Result<()> {
        self.banner("EXPORT TO TXT")?;

        if self.session.users().is_empty() {
            writeln!(self.output, "No users to export.\n")?;
            return Ok(());
        }

        match self.session.export() {
            Ok(_) => writeln!(
                self.output,
                "The user list was exported successfully to {}\n",
                self.session.config().export_file()
            )?,
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                writeln!(
                    self.output,
                    "Error exporting the text file: {}\n",
                    e.user_friendly_message()
                )?;
            }
        }
        Ok(())
    }

    /// Returns whether the program should really exit.
    pub fn confirm_exit(&mut self) -> Result<bool> {
        if self.session.is_dirty()
            && !self.confirm("There are unsaved changes. Exit anyway? (Y/N): ")?
        {
            writeln!(self.output, "Operation cancelled. Returning to the menu.\n")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        let rule = "-".repeat(title.len() + 8);
        writeln!(self.output, "{rule}\n=== {title} ===\n{rule}\n")?;
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(question)?;
        Ok(is_affirmative(&answer))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Invalid UTF-8 is decoded lossily so it fails validation instead of
    /// ending the session.
    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(RegistryError::InputClosed);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// `S` (sí) and `Y` both confirm, ignoring case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("s") || answer.eq_ignore_ascii_case("y")
}
