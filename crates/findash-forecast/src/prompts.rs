//! Refined prompt examples shown alongside forecasts

/// A titled example prompt for generative financial analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefinedPrompt {
    pub title: &'static str,
    pub prompt: &'static str,
}

pub const REFINED_PROMPTS: [RefinedPrompt; 3] = [
    RefinedPrompt {
        title: "Market Trend Analysis Prompt",
        prompt: "Generate a detailed market trend analysis report for the healthcare sector, focusing on \
                 current inflation rates, geopolitical factors, and regulatory changes over the next quarter. \
                 Provide actionable insights and risk assessments.",
    },
    RefinedPrompt {
        title: "Company-Specific Financial Projection Prompt",
        prompt: "Produce a comprehensive financial projection report for a mid-sized healthcare company, \
                 highlighting revenue growth, profit margins, and cash flow trends on an annual basis. \
                 Include recommendations for achieving long-term stability.",
    },
    RefinedPrompt {
        title: "Investment Strategy Recommendations Prompt",
        prompt: "Create an investment strategy report for the healthcare industry, targeting short-term gains. \
                 Evaluate market conditions and provide actionable recommendations for risk management and \
                 portfolio diversification over a 5-year outlook.",
    },
];
