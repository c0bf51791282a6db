// Command line arguments
use crate::domain::category::CategoryId;
use crate::domain::note::NoteId;
use crate::domain::selection::Selection;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "notes", version, about = "Personal notes from the terminal", long_about = None)]
pub struct Cli {
    /// Override the API base URL from config
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and log in
    Register(RegisterArgs),
    /// Log in with email and password
    Login(LoginArgs),
    /// Log out and forget the stored token
    Logout,
    /// Show the dashboard: categories with counts and the notes under a selection
    List {
        /// "all" or a category id
        #[arg(short, long, default_value = "all")]
        category: Selection,
    },
    /// Show a single note
    Show { id: NoteId },
    /// Create an empty note in the default category
    New,
    /// Change a note's title, content or category
    Edit(EditArgs),
    /// Delete a note
    Delete { id: NoteId },
    /// Delete every note
    Clear {
        /// Confirm deleting all notes
        #[arg(long)]
        yes: bool,
    },
    /// Ask the server to generate notes inspired by a subject
    Populate { subject: String },
    /// List categories with their colors
    Categories,
    /// Create a category
    NewCategory {
        #[arg(long)]
        name: String,
        /// Defaults to #F44336
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename or recolor a category
    RenameCategory {
        id: CategoryId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Show the profile of the logged-in user
    Profile,
    /// Update names or password
    UpdateProfile(UpdateProfileArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "NOTES_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "NOTES_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: NoteId,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub category: Option<CategoryId>,
}

#[derive(Debug, Args)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub current_password: Option<String>,
    #[arg(long, requires = "repeat_new_password")]
    pub new_password: Option<String>,
    #[arg(long)]
    pub repeat_new_password: Option<String>,
}
