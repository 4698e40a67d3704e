use std::io;

use tracing_subscriber::EnvFilter;
use twilio_sms::{ClientConfig, TwilioClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account_sid = required_env("TWILIO_ACCOUNT_SID")?;
    let from = required_env("TWILIO_FROM")?;
    let to = required_env("TWILIO_TO")?;
    let body = std::env::var("TWILIO_BODY")
        .unwrap_or_else(|_| "Hello from the twilio-sms demo.".to_owned());

    let config = match std::env::var("TWILIO_BASE_URL") {
        Ok(base_url) => ClientConfig::new(base_url, account_sid)?,
        Err(_) => ClientConfig::with_default_base_url(account_sid)?,
    };

    let client = TwilioClient::new(config);
    let message = client.send_sms(&from, &to, &body).await?;
    println!(
        "sid: {:?}, status: {:?}, segments: {:?}",
        message.sid, message.status, message.num_segments
    );

    Ok(())
}
