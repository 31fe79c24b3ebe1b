use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "whatsinfo", version)]
#[command(
  about = "Look up WhatsApp metadata and IP geolocation for a phone number.",
  long_about = "Prompts for a phone number, queries the WhatsApp number info API configured through RAPIDAPI_KEY and RAPIDAPI_HOST, then resolves any IP address found in the response with ip-api.com."
)]
pub struct Cli {}
