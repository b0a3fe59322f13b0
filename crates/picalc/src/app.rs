//! Application entry point and dispatch.

use anyhow::Result;

use picalc_cli::presenter::CLIResultPresenter;
use picalc_cli::report::{write_report, RunReport};
use picalc_cli::ui;
use picalc_core::observer::{LoggingObserver, NoOpObserver, ProgressObserver};
use picalc_core::options::Options;
use picalc_core::progress::CancellationToken;
use picalc_core::registry::DefaultFactory;
use picalc_orchestration::interfaces::ResultPresenter;
use picalc_orchestration::orchestrator::{analyze_agreement, execute_runs_with_observer};
use picalc_orchestration::selection::get_executors_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = Options {
        workers: config.resolve_workers(),
        verbose: config.verbose,
        details: config.details,
    }
    .normalize();

    let factory = DefaultFactory::new();
    let executors = get_executors_to_run(&config.backend, &factory)?;
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    ctrlc_handler(cancel.clone());

    let observer: Box<dyn ProgressObserver> = if config.verbose {
        Box::new(LoggingObserver::new())
    } else {
        Box::new(NoOpObserver::new())
    };

    let timeout = Some(config.timeout_duration());
    let results = execute_runs_with_observer(
        &executors,
        config.terms,
        &opts,
        &cancel,
        timeout,
        observer.as_ref(),
    );

    // Cross-validate back-ends against each other
    if results.len() > 1 {
        match analyze_agreement(&results) {
            Err(e) => ui::print_warning(&e.to_string()),
            Ok(()) if config.verbose => ui::print_success("all back-ends agree"),
            Ok(()) => {}
        }
    }

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(
                &result.backend,
                config.terms,
                opts.workers,
                *value,
                result.duration,
                config.details,
            ),
            Err(error) => presenter.present_error(&error.to_string()),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write report to file if requested
    if let Some(ref path) = config.output {
        let report = RunReport::from_results(config.terms, opts.workers, &results);
        write_report(path, &report)?;
    }

    if results.iter().all(|r| r.outcome.is_err()) {
        anyhow::bail!("all back-end runs failed");
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
