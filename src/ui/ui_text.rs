use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Sidebar ---
    pub nav_marketplace: String,
    pub nav_dashboard: String,
    pub nav_upload: String,
    pub nav_wallet: String,
    pub nav_profile: String,
    pub label_not_connected: String,

    // --- Marketplace / Detail ---
    pub marketplace_heading: String,
    pub detail_heading: String,
    pub label_version: String,
    pub label_artifact: String,
    pub label_license: String,
    pub label_price: String,
    pub btn_purchase: String,
    pub btn_back: String,
    pub error_unknown_model: String,

    // --- Dashboard ---
    pub dashboard_heading: String,
    pub revenue_heading: String,
    pub label_available_earnings: String,
    pub btn_withdraw: String,
    pub label_status: String,
    pub status_pending: String,
    pub status_confirmed: String,

    // --- Upload ---
    pub upload_heading: String,
    pub placeholder_model_name: String,
    pub placeholder_description: String,
    pub label_royalty: String,
    pub label_estimated_gas: String,
    pub gas_calculating: String,
    pub btn_deploy: String,

    // --- Wallet ---
    pub wallet_heading: String,
    pub btn_connect: String,
    pub btn_disconnect: String,
    pub btn_copy: String,
    pub label_copied: String,
    pub label_balance: String,
    pub balance_unavailable: String,
    pub label_connected_since: String,
    pub connecting_wallet: String,
    pub status_no_provider: String,
    pub status_no_account: String,

    // --- Profile ---
    pub profile_heading: String,
    pub label_wallet: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "ModelChain".to_string(),

    nav_marketplace: "Marketplace".to_string(),
    nav_dashboard: "Dashboard".to_string(),
    nav_upload: "Upload".to_string(),
    nav_wallet: "Wallet".to_string(),
    nav_profile: "Profile".to_string(),
    label_not_connected: "Not Connected".to_string(),

    marketplace_heading: "Marketplace".to_string(),
    detail_heading: "Model Detail".to_string(),
    label_version: "Version".to_string(),
    label_artifact: "Artifact".to_string(),
    label_license: "License".to_string(),
    label_price: "Price".to_string(),
    btn_purchase: "Purchase".to_string(),
    btn_back: "< Back".to_string(),
    error_unknown_model: "This model is no longer listed.".to_string(),

    dashboard_heading: "Dashboard".to_string(),
    revenue_heading: "Monthly Revenue".to_string(),
    label_available_earnings: "Available Earnings".to_string(),
    btn_withdraw: "Withdraw".to_string(),
    label_status: "Status".to_string(),
    status_pending: "Pending".to_string(),
    status_confirmed: "Confirmed".to_string(),

    upload_heading: "Upload Model".to_string(),
    placeholder_model_name: "Model Name".to_string(),
    placeholder_description: "Description".to_string(),
    label_royalty: "Royalty".to_string(),
    label_estimated_gas: "Estimated Gas".to_string(),
    gas_calculating: "Calculating...".to_string(),
    btn_deploy: "Deploy".to_string(),

    wallet_heading: "Wallet".to_string(),
    btn_connect: "Connect Wallet".to_string(),
    btn_disconnect: "Disconnect".to_string(),
    btn_copy: "Copy".to_string(),
    label_copied: "Copied".to_string(),
    label_balance: "Balance".to_string(),
    balance_unavailable: "unavailable".to_string(),
    label_connected_since: "Connected since".to_string(),
    connecting_wallet: "Waiting for wallet approval...".to_string(),
    status_no_provider: "No wallet provider detected.".to_string(),
    status_no_account: "No account authorized.".to_string(),

    profile_heading: "Profile".to_string(),
    label_wallet: "Wallet".to_string(),
});
