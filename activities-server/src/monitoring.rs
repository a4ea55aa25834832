use chrono::Local;
use colored::*;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    SignedUp {
        activity: String,
        email: String,
    },
    Unregistered {
        activity: String,
        email: String,
    },
    RemovedEverywhere {
        email: String,
        activities: Vec<String>,
    },
    Rejected {
        message: String,
    },
}

#[derive(Clone)]
pub struct MonitoringLayer {
    tx: mpsc::Sender<LogMessage>,
}

impl MonitoringLayer {
    pub fn new(tx: mpsc::Sender<LogMessage>) -> Self {
        Self { tx }
    }

    pub async fn log_signed_up(&self, activity: &str, email: &str) {
        let _ = self
            .tx
            .send(LogMessage::SignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })
            .await;
    }

    pub async fn log_unregistered(&self, activity: &str, email: &str) {
        let _ = self
            .tx
            .send(LogMessage::Unregistered {
                activity: activity.to_string(),
                email: email.to_string(),
            })
            .await;
    }

    pub async fn log_removed_everywhere(&self, email: &str, activities: &[String]) {
        let _ = self
            .tx
            .send(LogMessage::RemovedEverywhere {
                email: email.to_string(),
                activities: activities.to_vec(),
            })
            .await;
    }

    pub async fn log_rejected(&self, message: String) {
        let _ = self.tx.send(LogMessage::Rejected { message }).await;
    }
}

pub async fn spawn_monitoring_display(mut rx: mpsc::Receiver<LogMessage>) {
    tokio::spawn(async move {
        info!("");
        info!("{}", "📋 Registry Log:".bold());
        info!("{}", "─".repeat(80).dimmed());

        while let Some(log) = rx.recv().await {
            let timestamp = Local::now().format("%H:%M:%S%.3f");

            match log {
                LogMessage::SignedUp { activity, email } => {
                    info!(
                        "{} {} {} signed up for {}",
                        timestamp.to_string().dimmed(),
                        "→".green().bold(),
                        email.yellow(),
                        activity.white().bold()
                    );
                }
                LogMessage::Unregistered { activity, email } => {
                    info!(
                        "{} {} {} left {}",
                        timestamp.to_string().dimmed(),
                        "←".red().bold(),
                        email.yellow(),
                        activity.white().bold()
                    );
                }
                LogMessage::RemovedEverywhere { email, activities } => {
                    let from = if activities.is_empty() {
                        "no activities".dimmed().to_string()
                    } else {
                        activities.join(", ").white().bold().to_string()
                    };
                    info!(
                        "{} {} {} removed from {}",
                        timestamp.to_string().dimmed(),
                        "⇐".red().bold(),
                        email.yellow(),
                        from
                    );
                }
                LogMessage::Rejected { message } => {
                    info!(
                        "{} ❌ Rejected: {}",
                        timestamp.to_string().dimmed(),
                        message.red()
                    );
                }
            }
        }
    });
}
