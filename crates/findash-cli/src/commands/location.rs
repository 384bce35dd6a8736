use super::{Context, IpArgs};
use anyhow::Result;
use colored::*;
use findash_client::Endpoint;

pub async fn ip(ctx: &Context, args: IpArgs) -> Result<()> {
  if ctx.raw {
    return ctx.print_raw(Endpoint::IpInfo, &args.ip).await;
  }

  let location = ctx.client.location().ip_info(&args.ip).await?;
  ctx.print_json(&location)?;

  if let Some((lat, lon)) = location.coordinates() {
    ctx.emit(format!("{} {:.4}, {:.4}", "Coordinates:".bold(), lat, lon))?;
  }
  Ok(())
}
