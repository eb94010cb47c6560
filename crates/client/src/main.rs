//! rsvp-client CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rsvp_client::cli::{Cli, Commands, OutputFormat};
use rsvp_client::client::RsvpClient;
use rsvp_client::output::{json, pretty};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RsvpClient::new(&cli.base_url);

    match cli.command {
        Commands::Rsvps(rsvps_cmd) => {
            use rsvp_client::cli::rsvps::RsvpsAction;
            match rsvps_cmd.action {
                RsvpsAction::List => {
                    let rsvps = client.list_rsvps().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&rsvps)),
                        OutputFormat::Pretty => println!("{}", pretty::format_rsvps(&rsvps)),
                    }
                }
                RsvpsAction::Get { id } => {
                    let rsvp = client.get_rsvp(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&rsvp)),
                        OutputFormat::Pretty => println!("{}", pretty::format_rsvp(&rsvp)),
                    }
                }
                RsvpsAction::Create {
                    guest_name,
                    total_attending,
                } => {
                    let rsvp = client.create_rsvp(&guest_name, total_attending).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&rsvp)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_rsvp(&rsvp))
                        }
                    }
                }
                RsvpsAction::Update {
                    id,
                    guest_name,
                    total_attending,
                } => {
                    let rsvp = client
                        .update_rsvp(id, &guest_name, total_attending)
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&rsvp)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_rsvp(&rsvp))
                        }
                    }
                }
                RsvpsAction::Delete { id } => {
                    client.delete_rsvp(id).await?;
                    if !cli.quiet {
                        println!("Deleted RSVP {}", id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use rsvp_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.health_live().await?;
                    if !cli.quiet {
                        println!("Server is live");
                    }
                }
                HealthAction::Ready => {
                    let status = client.health_ready().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&status)),
                        OutputFormat::Pretty => println!("{}", pretty::format_ready(&status)),
                    }
                    if !status.healthy {
                        return Ok(ExitCode::FAILURE);
                    }
                }
                HealthAction::Cache => {
                    let stats = client.health_cache().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&stats)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_cache_stats(&stats))
                        }
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
