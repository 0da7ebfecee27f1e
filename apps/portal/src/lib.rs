//! # IraiDesk ポータルライブラリ
//!
//! 受付ポータルのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app`: DI（State）の初期化とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラエラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `renderer`: tera によるページ / 文書テンプレートのレンダリング
//! - `usecase`: 文書生成と通知のユースケース

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod renderer;
pub mod usecase;
