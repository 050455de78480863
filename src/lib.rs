pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Result, SolverError};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = config::AppConfig::from_env().expect("invalid configuration");
    logging::init(&config.log).expect("failed to initialize logging");

    let state = commands::AppState::from_config(&config).expect("failed to initialize solver");
    log::info!(
        "作业解题助手 v{} starting ({} solver)",
        env!("CARGO_PKG_VERSION"),
        state.session.backend_name()
    );

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            // 解题命令
            commands::solver::desktop::solve_problem,
            commands::solver::desktop::cancel_solve,
            commands::solver::desktop::get_solver_status,
            commands::solver::desktop::list_subjects,
            // 历史命令
            commands::history::desktop::get_history,
            commands::history::desktop::get_problem,
            commands::history::desktop::remove_problem,
            commands::history::desktop::clear_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
