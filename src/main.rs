use clap::Parser;
use university_registry::utils::error::{ErrorSeverity, RegistryError};
use university_registry::utils::{logger, validation::Validate};
use university_registry::{CliConfig, Command, Roster, University, UniversityConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.config.as_deref() {
        Some(path) => UniversityConfig::from_file(path).unwrap_or_else(|e| exit_with(&e)),
        None => UniversityConfig::default(),
    };

    if cli.json_logs {
        logger::init_json_logger(Some(config.logging.level.as_str()));
    } else {
        logger::init_cli_logger(cli.verbose, Some(config.logging.level.as_str()));
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let university = University::with_config(&config);
    if let Some(path) = cli.roster.as_deref() {
        tracing::info!("Loading roster from {}", path);
        if let Err(e) = Roster::from_file(path).and_then(|roster| roster.apply(&university)) {
            tracing::error!("Roster could not be applied: {}", e);
            exit_with(&e);
        }
    }

    let output = match cli.command {
        Command::StudentCourses { id } => university
            .get_student_courses(id)
            .map(|ids| serde_json::to_string(&ids)),
        Command::FacultyCourses { id } => university
            .get_faculty_courses(id)
            .map(|ids| serde_json::to_string(&ids)),
        Command::CourseStudents { id } => university
            .get_course_students(id)
            .map(|ids| serde_json::to_string(&ids)),
        Command::Summary => Ok(serde_json::to_string(&university.summary())),
    };

    match output {
        Ok(rendered) => println!("{}", rendered?),
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &RegistryError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
