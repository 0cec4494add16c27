//! # Graceful shutdown シグナル
//!
//! `axum::serve(...).with_graceful_shutdown(shutdown_signal())` に渡す Future。
//! Ctrl-C または SIGTERM（Unix のみ）のどちらか早い方で完了する。

/// 終了シグナルを待つ
///
/// シグナルハンドラの登録に失敗した場合はログを出し、その経路は待たない
/// （もう一方のシグナルで停止できる）。
pub async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {}", e);
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
         Ok(mut signal) => {
            signal.recv().await;
         }
         Err(e) => {
            tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      _ = ctrl_c => tracing::info!("Ctrl-C を受信しました。シャットダウンします"),
      _ = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンします"),
   }
}
