// Command handlers
use crate::application::editor_service::EditOutcome;
use crate::application::notes_api::{CategoryChanges, Credentials, Registration};
use crate::domain::editor::INCOMPLETE_MESSAGE;
use crate::domain::note::{NoteChanges, NoteId};
use crate::domain::profile::{PasswordChange, ProfileUpdate};
use crate::domain::selection::Selection;
use crate::presentation::app_state::AppState;
use crate::presentation::cli::{Command, EditArgs, LoginArgs, RegisterArgs, UpdateProfileArgs};
use crate::presentation::render::{
    render_categories, render_dashboard, render_note, render_profile,
};
use anyhow::{bail, Context};
use chrono::Local;

pub async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Register(args) => register(state, args).await,
        Command::Login(args) => login(state, args).await,
        Command::Logout => logout(state).await,
        Command::List { category } => list(state, category).await,
        Command::Show { id } => show(state, id).await,
        Command::New => new_note(state).await,
        Command::Edit(args) => edit(state, args).await,
        Command::Delete { id } => delete(state, id).await,
        Command::Clear { yes } => clear(state, yes).await,
        Command::Populate { subject } => populate(state, &subject).await,
        Command::Categories => categories(state).await,
        Command::NewCategory { name, color } => {
            let category = state
                .dashboard_service
                .create_category(&name, color.as_deref())
                .await
                .context("Failed to create new category")?;
            println!("New category created: {} '{}' ({})", category.id, category.name, category.color);
            Ok(())
        }
        Command::RenameCategory { id, name, color } => {
            let changes = CategoryChanges { name, color };
            let category = state
                .dashboard_service
                .rename_category(id, &changes)
                .await
                .context("Failed to update the category")?;
            println!("Category {} is now '{}' ({})", category.id, category.name, category.color);
            Ok(())
        }
        Command::Profile => {
            let profile = state
                .profile_service
                .show()
                .await
                .context("Could not load profile")?;
            print!("{}", render_profile(&profile));
            Ok(())
        }
        Command::UpdateProfile(args) => update_profile(state, args).await,
    }
}

async fn register(state: &AppState, args: RegisterArgs) -> anyhow::Result<()> {
    let registration = Registration {
        username: args.email,
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
    };
    let profile = state
        .auth_service
        .register(&registration)
        .await
        .context("Registration failed")?;
    println!("Welcome, {}! Your account is ready.", profile.username);
    Ok(())
}

async fn login(state: &AppState, args: LoginArgs) -> anyhow::Result<()> {
    let credentials = Credentials {
        username: args.email,
        password: args.password,
    };
    let profile = state
        .auth_service
        .login(&credentials)
        .await
        .context("Login failed")?;
    println!("Logged in as {}", profile.username);
    Ok(())
}

async fn logout(state: &AppState) -> anyhow::Result<()> {
    state.auth_service.logout().await.context("Failed to logout")?;
    println!("Logged out successfully.");
    Ok(())
}

async fn list(state: &AppState, selection: Selection) -> anyhow::Result<()> {
    let dashboard = state
        .dashboard_service
        .get_dashboard(selection, &Local::now())
        .await
        .context("Failed to load notes")?;
    print!("{}", render_dashboard(&dashboard));
    Ok(())
}

async fn show(state: &AppState, id: NoteId) -> anyhow::Result<()> {
    let opened = state
        .editor_service
        .open(id)
        .await
        .context("Failed to load the note")?;
    print!("{}", render_note(&opened, &Local::now()));
    Ok(())
}

async fn new_note(state: &AppState) -> anyhow::Result<()> {
    let note = state
        .dashboard_service
        .create_note()
        .await
        .context("Failed to create a new note")?;
    println!("Created note {}. Fill it in with `notes edit {} --title ... --content ...`", note.id, note.id);
    Ok(())
}

async fn edit(state: &AppState, args: EditArgs) -> anyhow::Result<()> {
    let changes = NoteChanges {
        title: args.title,
        content: args.content,
        category_id: args.category,
    };
    let outcome = state
        .editor_service
        .apply(args.id, &changes)
        .await
        .context("Failed to update the note")?;

    match outcome {
        EditOutcome::Saved(note) => println!("Saved note {}.", note.id),
        EditOutcome::Incomplete(note) => {
            println!("Saved note {}.", note.id);
            eprintln!("{}", INCOMPLETE_MESSAGE);
        }
        EditOutcome::Discarded(id) => println!("Note {} was empty and has been deleted.", id),
    }
    Ok(())
}

async fn delete(state: &AppState, id: NoteId) -> anyhow::Result<()> {
    state
        .dashboard_service
        .delete_note(id)
        .await
        .context("Failed to delete note")?;
    println!("Note deleted successfully.");
    Ok(())
}

async fn clear(state: &AppState, yes: bool) -> anyhow::Result<()> {
    if !yes {
        bail!("Refusing to clear all notes without --yes");
    }
    let deleted = state
        .dashboard_service
        .clear_all()
        .await
        .context("Failed to clear notes")?;
    println!("All notes cleared! ({} deleted)", deleted);
    Ok(())
}

async fn populate(state: &AppState, subject: &str) -> anyhow::Result<()> {
    let created = state
        .dashboard_service
        .populate(subject)
        .await
        .context("Failed to populate notes")?;
    println!("Successfully created {} notes inspired by \"{}\".", created, subject.trim());
    Ok(())
}

async fn categories(state: &AppState) -> anyhow::Result<()> {
    let categories = state
        .dashboard_service
        .list_categories()
        .await
        .context("Failed to load categories")?;
    print!("{}", render_categories(&categories));
    Ok(())
}

async fn update_profile(state: &AppState, args: UpdateProfileArgs) -> anyhow::Result<()> {
    let password = match (args.new_password, args.repeat_new_password) {
        (None, None) => None,
        (new, repeat) => Some(PasswordChange {
            current: args.current_password.unwrap_or_default(),
            new: new.unwrap_or_default(),
            repeat: repeat.unwrap_or_default(),
        }),
    };
    let update = ProfileUpdate {
        first_name: args.first_name,
        last_name: args.last_name,
        password,
    };

    let profile = state
        .profile_service
        .update(&update)
        .await
        .context("Failed to update profile")?;
    println!("Profile updated successfully.");
    print!("{}", render_profile(&profile));
    Ok(())
}
