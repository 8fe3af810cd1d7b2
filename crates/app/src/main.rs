//! `learn`: browse the course catalog and record progress from a terminal.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use learn_core::model::{CourseId, LessonId};
use services::LearningServices;
use tracing_subscriber::EnvFilter;
use ui::vm::{build_bookmarks, build_home};
use ui::{AppContext, LessonAction, NavigationError, PageKind, Route, RouteQuery, UiApp};

mod config;
mod render;

#[derive(Parser)]
#[command(name = "learn", version, about = "Self-paced printing courses in the terminal")]
struct Cli {
    /// SQLite database holding learner progress
    #[arg(long = "db", env = "LEARN_DB_URL", default_value = "sqlite://learn.sqlite3")]
    db_url: String,

    /// JSON course catalog to use instead of the bundled one
    #[arg(long, env = "LEARN_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses
    Courses {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,

        /// Filter by title or description
        #[arg(long, default_value = "")]
        search: String,
    },

    /// List course categories
    Categories,

    /// Show a course and its lessons
    Course { course: String },

    /// Show a lesson
    Lesson {
        course: String,
        lesson: String,

        /// Print the sanitised HTML body instead of markdown
        #[arg(long)]
        html: bool,
    },

    /// Render a page address such as `lesson.html?course=1&lesson=2`
    Open { address: String },

    /// Mark a lesson as completed
    Complete { course: String, lesson: String },

    /// Add or remove a lesson bookmark
    Bookmark { course: String, lesson: String },

    /// List bookmarked lessons
    Bookmarks,

    /// Print the stored progress record of a course as JSON
    Progress { course: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err:#}");
        process::exit(2);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db_url = config::normalize_sqlite_url(&cli.db_url);
    config::prepare_sqlite_file(&db_url)?;
    let catalog = config::load_catalog(cli.catalog.as_deref())?;
    let services = LearningServices::new_sqlite(&db_url, catalog)
        .await
        .with_context(|| format!("opening {db_url}"))?;
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = AppContext::new(&app);

    let output = match cli.command {
        Commands::Courses { category, search } => {
            let snapshot = context.learner_state().snapshot().await;
            let home = build_home(context.catalog(), &snapshot, category.as_deref(), &search);
            render::home_view(&home)
        }
        Commands::Categories => render::categories(&context.catalog().list_categories()),
        Commands::Course { course } => {
            let navigation = RouteQuery::new(Some(course.as_str()), None)
                .resolve(PageKind::Lessons, context.catalog());
            render_navigation(&context, navigation, false).await
        }
        Commands::Lesson {
            course,
            lesson,
            html,
        } => {
            let navigation = RouteQuery::new(Some(course.as_str()), Some(lesson.as_str()))
                .resolve(PageKind::Lesson, context.catalog());
            render_navigation(&context, navigation, html).await
        }
        Commands::Open { address } => render::page(&context.open(&address).await, false),
        Commands::Complete { course, lesson } => {
            match lesson_target(&context, &course, &lesson) {
                Ok((course, lesson)) => {
                    let vm = context
                        .apply(LessonAction::MarkComplete { course, lesson })
                        .await?;
                    format!("{}: {}\n{}\n", vm.title, vm.complete_button_label(), vm.progress_label)
                }
                Err(err) => render_navigation(&context, Err(err), false).await,
            }
        }
        Commands::Bookmark { course, lesson } => {
            match lesson_target(&context, &course, &lesson) {
                Ok((course, lesson)) => {
                    let vm = context
                        .apply(LessonAction::ToggleBookmark { course, lesson })
                        .await?;
                    format!("{}: {}\n", vm.title, vm.bookmark_button_label())
                }
                Err(err) => render_navigation(&context, Err(err), false).await,
            }
        }
        Commands::Bookmarks => {
            let snapshot = context.learner_state().snapshot().await;
            render::bookmark_list(&build_bookmarks(context.catalog(), &snapshot))
        }
        Commands::Progress { course } => {
            let Some(course) = context.catalog().find_course(&course).map(|c| c.id()) else {
                return print_redirect(&context, NavigationError::CourseNotFound).await;
            };
            let progress = context.learner_state().course_progress(course).await;
            let mut json = serde_json::to_string_pretty(&progress)?;
            json.push('\n');
            json
        }
    };

    print!("{output}");
    Ok(())
}

fn lesson_target(
    context: &AppContext,
    course: &str,
    lesson: &str,
) -> Result<(CourseId, LessonId), NavigationError> {
    match RouteQuery::new(Some(course), Some(lesson)).resolve(PageKind::Lesson, context.catalog())? {
        Route::Lesson { course, lesson } => Ok((course, lesson)),
        Route::Home | Route::Lessons { .. } => Err(NavigationError::LessonNotFound),
    }
}

async fn render_navigation(
    context: &AppContext,
    navigation: Result<Route, NavigationError>,
    html: bool,
) -> String {
    if let Err(err) = &navigation {
        tracing::info!(error = %err, "navigation redirected");
    }
    render::page(&context.render_navigation(navigation).await, html)
}

async fn print_redirect(context: &AppContext, err: NavigationError) -> anyhow::Result<()> {
    print!("{}", render_navigation(context, Err(err), false).await);
    Ok(())
}
