//! The interactive admin console.
//!
//! Command definitions and dispatch. Every resource gets the same four
//! subcommands, driven by one generic handler over [`CrudScreen`]; the
//! faculties commands additionally page through the paginated listing.

mod forms;

use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use validator::Validate;

use collegiate_client::{Api, AuthApi, ResourceGateway, RestResource};
use collegiate_config::{ApiConfig, StorageConfig};
use collegiate_core::{PageRequest, SortDirection};
use collegiate_models::faculty::FACULTY_SORT_FIELD;
use collegiate_models::roles;
use collegiate_models::{Courses, Departments, Faculties, Resource, Students, Users};
use collegiate_models::auth::LoginCredentials;
use collegiate_session::SessionStore;

use crate::screens::{CrudScreen, LoginOutcome, LoginScreen, SignupOutcome, SignupScreen};

#[derive(Parser)]
#[command(name = "collegiate")]
#[command(about = "Collegiate - admin console for the college API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Register a new account
    Signup,
    /// Drop the stored session
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// Manage students
    Students {
        #[command(subcommand)]
        command: CrudCommand,
    },
    /// Manage faculty members
    Faculties {
        #[command(subcommand)]
        command: FacultyCommand,
    },
    /// Manage courses
    Courses {
        #[command(subcommand)]
        command: CrudCommand,
    },
    /// Manage departments
    Departments {
        #[command(subcommand)]
        command: CrudCommand,
    },
    /// Manage user accounts
    Users {
        #[command(subcommand)]
        command: CrudCommand,
    },
}

#[derive(Subcommand)]
pub enum CrudCommand {
    /// List all entries
    List,
    /// Add an entry interactively
    Add,
    /// Edit an entry by id
    Edit { id: i64 },
    /// Delete an entry by id, after confirmation
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum FacultyCommand {
    /// List one page of faculty members
    List {
        /// Page to show (1-based)
        #[arg(short = 'p', long, default_value = "1")]
        page: i64,

        /// Entries per page
        #[arg(short = 's', long, default_value = "5")]
        size: i64,
    },
    /// Add a faculty member interactively
    Add,
    /// Edit a faculty member by id
    Edit { id: i64 },
    /// Delete a faculty member by id, after confirmation
    Delete { id: i64 },
}

/// Dispatch a parsed invocation.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let api_config = ApiConfig::from_env();
    let storage_config = StorageConfig::from_env();
    let session = Arc::new(SessionStore::at(storage_config.session_path));
    let api = Api::new(&api_config, session.clone())?;

    match cli.command {
        Commands::Login { username, password } => handle_login(api, session, username, password).await,
        Commands::Signup => handle_signup(api).await,
        Commands::Logout => handle_logout(api, session),
        Commands::Whoami => handle_whoami(&session),
        Commands::Students { command } => {
            let screen = CrudScreen::<Students, _>::new(RestResource::new(api));
            run_crud(screen, command, forms::fill_student, forms::print_students).await
        }
        Commands::Faculties { command } => handle_faculties(api, command).await,
        Commands::Courses { command } => {
            let screen = CrudScreen::<Courses, _>::new(RestResource::new(api));
            run_crud(screen, command, forms::fill_course, forms::print_courses).await
        }
        Commands::Departments { command } => {
            let screen = CrudScreen::<Departments, _>::new(RestResource::new(api));
            run_crud(screen, command, forms::fill_department, forms::print_departments).await
        }
        Commands::Users { command } => {
            let screen = CrudScreen::<Users, _>::new(RestResource::new(api));
            run_crud(screen, command, forms::fill_user, forms::print_users).await
        }
    }
}

async fn handle_login(
    api: Api,
    session: Arc<SessionStore>,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let screen = LoginScreen::new(AuthApi::new(api), session);
    match screen.login(&LoginCredentials { username, password }).await {
        LoginOutcome::Success { route } => {
            println!("\n✅ Logged in.");
            println!("   Landing route: /{}", route.path());
            Ok(())
        }
        LoginOutcome::Failure { message } => bail!(message),
    }
}

async fn handle_signup(api: Api) -> anyhow::Result<()> {
    let request = forms::prompt_signup()?;
    let screen = SignupScreen::new(AuthApi::new(api));

    match screen.signup(&request).await {
        SignupOutcome::Success {
            message,
            redirect,
            redirect_after,
        } => {
            println!("\n✅ {message}");
            tokio::time::sleep(redirect_after).await;
            println!("   → /{}", redirect.path());
            Ok(())
        }
        SignupOutcome::Failure { message } => bail!(message),
    }
}

fn handle_logout(api: Api, session: Arc<SessionStore>) -> anyhow::Result<()> {
    let screen = LoginScreen::new(AuthApi::new(api), session);
    screen.logout()?;
    println!("✅ Logged out.");
    Ok(())
}

fn handle_whoami(session: &SessionStore) -> anyhow::Result<()> {
    match session.role() {
        Some(role) => {
            println!("Role:    {role}");
            println!("Heading: {}", roles::login_heading(Some(&role)));
            println!("Icon:    {}", roles::login_icon(Some(&role)));
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

async fn handle_faculties(api: Api, command: FacultyCommand) -> anyhow::Result<()> {
    let paginated_screen = |page: i64, size: i64| {
        let request = PageRequest::new(page, size).sorted_by(FACULTY_SORT_FIELD, SortDirection::Asc);
        CrudScreen::<Faculties, _>::paginated(RestResource::new(api.clone()), request)
    };

    match command {
        FacultyCommand::List { page, size } => {
            let mut screen = paginated_screen((page - 1).max(0), size);
            if !screen.load().await {
                bail!(screen.error().unwrap_or("Failed to load faculties.").to_string());
            }
            forms::print_faculties(screen.items());
            if let (Some(page), Some(total)) = (screen.page(), screen.total_pages()) {
                println!("\nPage {} of {}", page + 1, total.max(1));
            }
            Ok(())
        }
        FacultyCommand::Add => {
            run_crud(
                paginated_screen(0, 5),
                CrudCommand::Add,
                forms::fill_faculty,
                forms::print_faculties,
            )
            .await
        }
        FacultyCommand::Edit { id } => {
            run_crud(
                paginated_screen(0, 5),
                CrudCommand::Edit { id },
                forms::fill_faculty,
                forms::print_faculties,
            )
            .await
        }
        FacultyCommand::Delete { id } => {
            run_crud(
                paginated_screen(0, 5),
                CrudCommand::Delete { id },
                forms::fill_faculty,
                forms::print_faculties,
            )
            .await
        }
    }
}

/// Drive one CRUD subcommand through a screen.
///
/// `fill` runs the interactive form over the open draft; `print` renders
/// the committed list.
async fn run_crud<R, G, F, P>(
    mut screen: CrudScreen<R, G>,
    command: CrudCommand,
    fill: F,
    print: P,
) -> anyhow::Result<()>
where
    R: Resource,
    R::Id: From<i64>,
    R::Draft: Validate,
    G: ResourceGateway<R>,
    F: Fn(&mut R::Draft) -> anyhow::Result<()>,
    P: Fn(&[R::Entity]),
{
    match command {
        CrudCommand::List => {
            if !screen.load().await {
                return Err(screen_error(&screen));
            }
            print(screen.items());
            Ok(())
        }
        CrudCommand::Add => {
            screen.open_add_form();
            fill_and_validate(&mut screen, &fill)?;
            if !screen.submit().await {
                return Err(screen_error(&screen));
            }
            println!("\n✅ Added {}.", R::SINGULAR);
            print(screen.items());
            Ok(())
        }
        CrudCommand::Edit { id } => {
            if !screen.load().await {
                return Err(screen_error(&screen));
            }
            let entity = screen
                .items()
                .iter()
                .find(|entity| R::id(entity) == R::Id::from(id))
                .cloned();
            let Some(entity) = entity else {
                bail!("No {} with id {id}.", R::SINGULAR);
            };
            screen.open_edit_form(&entity);
            fill_and_validate(&mut screen, &fill)?;
            if !screen.submit().await {
                return Err(screen_error(&screen));
            }
            println!("\n✅ Updated {}.", R::SINGULAR);
            print(screen.items());
            Ok(())
        }
        CrudCommand::Delete { id } => {
            if !screen.load().await {
                return Err(screen_error(&screen));
            }
            let Some(name) = screen.request_delete(R::Id::from(id)).map(String::from) else {
                bail!("No {} with id {id}.", R::SINGULAR);
            };
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete {} {name}?", R::SINGULAR))
                .default(false)
                .interact()?;
            if !confirmed {
                screen.decline_delete();
                println!("Cancelled.");
                return Ok(());
            }
            if !screen.confirm_delete().await {
                return Err(screen_error(&screen));
            }
            println!("\n✅ Deleted {}.", R::SINGULAR);
            print(screen.items());
            Ok(())
        }
    }
}

fn fill_and_validate<R, G, F>(screen: &mut CrudScreen<R, G>, fill: &F) -> anyhow::Result<()>
where
    R: Resource,
    R::Draft: Validate,
    G: ResourceGateway<R>,
    F: Fn(&mut R::Draft) -> anyhow::Result<()>,
{
    let Some(draft) = screen.draft_mut() else {
        bail!("No form is open.");
    };
    fill(draft)?;
    if let Err(errors) = draft.validate() {
        let mut lines = Vec::new();
        for (field, messages) in errors.field_errors() {
            for message in messages {
                match &message.message {
                    Some(text) => lines.push(format!("  - {field}: {text}")),
                    None => lines.push(format!("  - {field} is invalid")),
                }
            }
        }
        bail!("Validation failed:\n{}", lines.join("\n"));
    }
    Ok(())
}

fn screen_error<R, G>(screen: &CrudScreen<R, G>) -> anyhow::Error
where
    R: Resource,
    G: ResourceGateway<R>,
{
    anyhow::anyhow!(screen.error().unwrap_or("The request failed.").to_string())
}
