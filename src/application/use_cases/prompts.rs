use crate::domain::statement::StatementKind;

/// Build the analysis prompt for a statement kind. The digest JSON is
/// embedded verbatim in the `Data:` slot.
pub fn build_analysis_prompt(kind: StatementKind, digest_json: &str) -> String {
    match kind {
        StatementKind::BalanceSheet => build_balance_sheet_prompt(digest_json),
        StatementKind::ProfitLoss => build_profit_loss_prompt(digest_json),
        StatementKind::CashFlow => build_cash_flow_prompt(digest_json),
    }
}

pub fn build_balance_sheet_prompt(digest_json: &str) -> String {
    format!(
        "As a financial analyst, analyze the following balance sheet data and provide insights:\n\
         \n\
         Data: {}\n\
         \n\
         Please provide:\n\
         1. Key financial health indicators\n\
         2. Asset and liability analysis\n\
         3. Liquidity position\n\
         4. Capital structure insights\n\
         5. Notable trends or concerns\n\
         \n\
         Format your response in clear, actionable insights.",
        digest_json
    )
}

pub fn build_profit_loss_prompt(digest_json: &str) -> String {
    format!(
        "As a financial analyst, analyze the following profit and loss statement and provide insights:\n\
         \n\
         Data: {}\n\
         \n\
         Please provide:\n\
         1. Revenue performance analysis\n\
         2. Profitability metrics\n\
         3. Cost structure analysis\n\
         4. Operating efficiency insights\n\
         5. Key performance trends\n\
         \n\
         Format your response in clear, actionable insights.",
        digest_json
    )
}

pub fn build_cash_flow_prompt(digest_json: &str) -> String {
    format!(
        "As a financial analyst, analyze the following cash flow statement and provide insights:\n\
         \n\
         Data: {}\n\
         \n\
         Please provide:\n\
         1. Operating cash flow analysis\n\
         2. Investment activities review\n\
         3. Financing activities assessment\n\
         4. Liquidity and cash management\n\
         5. Cash flow sustainability\n\
         \n\
         Format your response in clear, actionable insights.",
        digest_json
    )
}
