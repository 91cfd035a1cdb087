//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use std::sync::Arc;

use checkin_core::models::sample_trainees;
use checkin_store::dynamodb::SdkBackend;
use checkin_store::{StoreConfig, StoreContext};
use dialoguer::Confirm;

use crate::prelude::*;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),

    /// Seed the trainee table with sample trainees.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates every missing check-in table (companies,
regions, locations, languages, trainings, checkins, text messages and
trainees). Each table is keyed by a string `id` and billed per request.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  DYNAMODB_TABLE_NAME - Trainee table base name (defaults to trainees)
  ENVIRONMENT         - Table suffix outside prod (defaults to dev)
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the tables instead of creating them.
    #[arg(long)]
    pub destroy: bool,

    /// Environment whose tables to manage (overrides ENVIRONMENT).
    #[arg(long)]
    pub environment: Option<String>,
}

/// Seed the trainee table with sample trainees.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Insert the sample trainees into the trainee table.

Existing trainees with the same ids are overwritten, so the command can be
run repeatedly.")]
pub struct SeedCommand {
    /// Environment whose trainee table to seed (overrides ENVIRONMENT).
    #[arg(long)]
    pub environment: Option<String>,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn store_config(environment: Option<String>) -> StoreConfig {
    let mut config = StoreConfig::from_env();
    if let Some(environment) = environment {
        config.environment = environment;
    }
    config
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let store_config = store_config(cmd.environment);

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), store_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&store_config).await;
    let tables = config::entity_tables(&store_config);
    let current_state = client::get_table_states(&dynamo_client, &tables).await?;

    if cmd.destroy {
        // Destroy flow
        let plan = planning::calculate_destroy_plan(&current_state, &tables);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if !plan.has_changes() {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete these tables? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting tables..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Tables destroyed successfully."));
        }
    } else {
        // Deploy flow
        let plan = planning::calculate_deploy_plan(&current_state, &tables);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('-') {
                    aprintln!("  {}", p_r(&line));
                } else if line.starts_with('!') {
                    aprintln!("  {}", p_y(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        if !plan.has_changes() {
            if !global.is_silent() {
                if plan.is_up_to_date() {
                    aprintln!("{}", p_g("Infrastructure is up to date."));
                } else {
                    aprintln!("{}", p_y("Waiting on table deletion, nothing to create yet."));
                }
            }
            return Ok(());
        }

        if !cmd.force {
            confirm("Apply these changes?", true)?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let store_config = store_config(cmd.environment);
    let backend = SdkBackend::connect(&store_config).await;
    let dynamo_client = backend.client().clone();
    let context = StoreContext::new(Arc::new(backend), store_config);
    let repository = context.trainees();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), context.config().target_display());
        aprintln!("{} {}", p_b("Table:"), repository.table_name());
        aprintln!();
    }

    // Verify table exists
    if client::get_table_state(&dynamo_client, repository.table_name())
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: repository.table_name().to_string(),
        });
    }

    let trainees = sample_trainees();

    if !global.is_silent() {
        aprintln!("{}", p_c("Trainees to save:"));
        for trainee in &trainees {
            aprintln!("  {}", seed::format_trainee(trainee));
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(&format!("Save {} trainees?", trainees.len()), true)?;
    }

    let inserted = seed::seed_trainees(&repository, &trainees).await?;

    if !global.is_silent() {
        aprintln!("{} {} trainees saved.", p_g("Success:"), inserted);
    }

    Ok(())
}
