//! Builtin English-to-Japanese phrase catalog for the dashboard UI.

/// Compiled-in phrase pairs. Keys are trimmed English phrases, values are
/// stored verbatim.
pub(super) const BUILTIN: &[(&str, &str)] = &[
    // Sidebar navigation
    ("Virtual Keys", "バーチャルキー"),
    ("Test Key", "テストキー"),
    ("Models", "モデル"),
    ("Usage", "使用状況"),
    ("Teams", "チーム"),
    ("Organizations", "組織"),
    ("Internal Users", "内部ユーザー"),
    ("API Reference", "API リファレンス"),
    ("Model Hub", "モデルハブ"),
    ("Logs", "ログ"),
    ("Guardrails", "ガードレール"),
    ("MCP Servers", "MCPサーバー"),
    ("Experimental", "実験的"),
    ("Settings", "設定"),
    ("Caching", "キャッシュ"),
    ("Budgets", "予算"),
    ("API Playground", "APIプレイグラウンド"),
    ("Tag Management", "タグ管理"),
    ("Vector Stores", "ベクターストア"),
    ("Old Usage", "旧使用状況"),
    ("Router Settings", "ルーター設定"),
    ("Pass-Through", "パススルー"),
    ("Logging & Alerts", "ログとアラート"),
    ("Admin Settings", "管理者設定"),
    // Key table actions and filters
    ("Create New Key", "新しいキーを作成"),
    ("Filters", "フィルター"),
    ("Reset Filters", "フィルターをリセット"),
    // Table columns
    ("Key ID", "キーID"),
    ("Key Alias", "キーエイリアス"),
    ("Secret Key", "シークレットキー"),
    ("Team Alias", "チームエイリアス"),
    ("Team ID", "チームID"),
    ("Organization ID", "組織ID"),
    ("User Email", "ユーザーメール"),
    ("User ID", "ユーザーID"),
    ("Created At", "作成日時"),
    ("Created By", "作成者"),
    ("Updated At", "更新日時"),
    ("Expires", "有効期限"),
    ("Spend (USD)", "支出（USD）"),
    ("Budget (USD)", "予算（USD）"),
    ("Budget Reset", "予算リセット"),
    ("Rate Limits", "レート制限"),
    // Pagination and empty states
    ("No keys found", "キーが見つかりません"),
    ("Previous", "前へ"),
    ("Next", "次へ"),
    ("Page", "ページ"),
    ("Showing", "表示中"),
    ("of", "の"),
    ("results", "結果"),
    ("No data", "データなし"),
    // Key form and clipboard toasts
    ("API Key", "APIキー"),
    ("Max Budget (USD)", "最大予算（USD）"),
    ("TPM Limit", "TPM制限"),
    ("RPM Limit", "RPM制限"),
    ("Expire Key (eg: 30s, 30h, 30d)", "キー有効期限（例：30s、30h、30d）"),
    ("Copy API Key", "APIキーをコピー"),
    ("Regenerate API Key", "APIキーを再生成"),
    ("API Key copied to clipboard", "APIキーがクリップボードにコピーされました"),
    ("API Key regenerated successfully", "APIキーが正常に再生成されました"),
    ("Failed to regenerate API Key", "APIキーの再生成に失敗しました"),
    ("No alias set", "エイリアスが設定されていません"),
];
