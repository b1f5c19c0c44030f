use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, trace};

use crate::core::{
    domain::models::{AppError, Command},
    services::{CommandParserService, RequestControllerService},
};

/// Answers one response line per command line until EOF or `QUIT`.
pub async fn serve_lines<R, W>(
    controller: Arc<RequestControllerService>,
    reader: R,
    mut writer: W,
) -> Result<(), AppError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();

        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            debug!("input closed");
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        let command = CommandParserService::parse(&line);
        trace!(?command, "command received");

        let quit = matches!(command, Command::Quit);
        let response = controller.handle(command).await;

        writer
            .write_all(format!("{}\n", response.to_wire()).as_bytes())
            .await?;
        writer.flush().await?;

        if quit {
            break;
        }
    }

    Ok(())
}
