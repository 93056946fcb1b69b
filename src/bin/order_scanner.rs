//! Scan one order QR code, show the order, and optionally mark it done.

use tokio::io::AsyncBufReadExt;
use tracing::{error, info, warn, Instrument};

use order_kiosk::app_system::{setup_tracing, KioskSystem};
use order_kiosk::config::AppConfig;
use order_kiosk::scanner::{LineScanner, ScanSession, ScannerFlow};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| {
        error!(error = %e, "Startup configuration error");
        e.to_string()
    })?;

    let system = KioskSystem::new(&config);
    let mut flow = ScannerFlow::new(system.context());
    let mut scanner = LineScanner::stdin();

    println!("Arahkan QR code pesanan ke pemindai...");
    flow.run(ScanSession::new(&mut scanner, config.camera.clone()))
        .instrument(tracing::info_span!("scan"))
        .await;
    print!("{}", flow.panel());

    if flow.panel().action().is_some_and(|action| !action.is_disabled()) {
        match scanner.into_reader() {
            Some(reader) => {
                println!(
                    "Tekan Enter untuk update status menjadi Selesai, \
                     atau ketik apa saja lalu Enter untuk batal."
                );
                match reader.lines().next_line().await {
                    Ok(Some(answer)) if answer.trim().is_empty() => {
                        flow.on_update_clicked()
                            .instrument(tracing::info_span!("status_update"))
                            .await;
                        print!("{}", flow.panel());
                    }
                    Ok(_) => info!("Update skipped"),
                    Err(e) => error!(error = %e, "Failed to read confirmation"),
                }
            }
            None => warn!("Scanner input unavailable, update skipped"),
        }
    }

    drop(flow);
    system.shutdown().await
}
