use serde::Serialize;

/// One weighted answer within a category. The label doubles as the wire
/// identifier for selections, so labels must stay unique per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryOption {
    pub weight: f64,
    pub label: &'static str,
}

/// One dimension of the viability rubric, with the estimate prompt and
/// guidance copy shown alongside the selector.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub estimate: &'static str,
    pub guidance: &'static str,
    pub read_more_url: &'static str,
    pub read_more_label: &'static str,
    pub options: Vec<CategoryOption>,
}

impl Category {
    pub fn option(&self, label: &str) -> Option<&CategoryOption> {
        self.options.iter().find(|option| option.label == label)
    }
}

/// Fixed, ordered rubric. Order determines presentation order and export
/// order; category count is always read from here, never assumed.
#[derive(Debug)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn standard() -> Self {
        Self {
            categories: standard_categories(),
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

fn standard_categories() -> Vec<Category> {
    vec![
        Category {
            key: "audience_size",
            label: "Audience Size",
            estimate: "Number of potential customers (consumers or businesses)",
            guidance: "10M+ people or 100k+ orgs have the problem?",
            read_more_url: "https://longform.asmartbear.com/roi-rubric/",
            read_more_label: "Fermi Estimation",
            options: vec![
                CategoryOption {
                    weight: 1_000_000_000.0,
                    label: "1,000,000,000",
                },
                CategoryOption {
                    weight: 100_000_000.0,
                    label: "100,000,000",
                },
                CategoryOption {
                    weight: 10_000_000.0,
                    label: "10,000,000",
                },
                CategoryOption {
                    weight: 1_000_000.0,
                    label: "1,000,000",
                },
                CategoryOption {
                    weight: 100_000.0,
                    label: "100,000",
                },
                CategoryOption {
                    weight: 10_000.0,
                    label: "10,000",
                },
                CategoryOption {
                    weight: 1_000.0,
                    label: "1,000",
                },
            ],
        },
        Category {
            key: "self_aware_market",
            label: "Self-Aware Market",
            estimate: "Does the audience know and care they have the problem?",
            guidance:
                "Confirm the problem is real, prospects agree and solving it is a priority",
            read_more_url: "https://longform.asmartbear.com/customer-development/",
            read_more_label: "Customer Development",
            options: vec![
                CategoryOption {
                    weight: 0.01,
                    label: "0.01: Few agree or care",
                },
                CategoryOption {
                    weight: 0.1,
                    label: "0.1: Thought-leaders care/evangelize",
                },
                CategoryOption {
                    weight: 0.5,
                    label: "0.5: Industry standard-practice",
                },
                CategoryOption {
                    weight: 1.0,
                    label: "1.0: Hard to find someone who doesn't care",
                },
            ],
        },
        Category {
            key: "lucrative_market",
            label: "Lucrative Market",
            estimate: "Annual allocated budget",
            guidance:
                "Confirm the audience has enough money available and budgeted to solve the problem",
            read_more_url:
                "https://longform.asmartbear.com/pricing-determines-your-business-model/",
            read_more_label: "Pricing Determines Your Business Model",
            options: vec![
                CategoryOption {
                    weight: 1_000_000.0,
                    label: "$1,000,000",
                },
                CategoryOption {
                    weight: 100_000.0,
                    label: "$100,000",
                },
                CategoryOption {
                    weight: 10_000.0,
                    label: "$10,000",
                },
                CategoryOption {
                    weight: 1_000.0,
                    label: "$1,000",
                },
                CategoryOption {
                    weight: 100.0,
                    label: "$100",
                },
                CategoryOption {
                    weight: 10.0,
                    label: "$10",
                },
                CategoryOption {
                    weight: 1.0,
                    label: "$1",
                },
            ],
        },
        Category {
            key: "liquid_market",
            label: "Liquid Market",
            estimate:
                "How often do your customers make a purchase decision and how hard is it to switch?",
            guidance:
                "Find all the frictions that prevent purchase (e.g. long-term contract, difficulty moving data, cross-system integrations, etc.)",
            read_more_url: "TBD",
            read_more_label: "TBD",
            options: vec![
                CategoryOption {
                    weight: 0.01,
                    label: "0.01: Every few years, hard to switch",
                },
                CategoryOption {
                    weight: 0.1,
                    label: "0.1: Once a year, moderate challenge to switch",
                },
                CategoryOption {
                    weight: 1.0,
                    label: "1.0: Always in the market, easy to switch",
                },
            ],
        },
        Category {
            key: "eager_to_buy_from_you",
            label: "Eager To Buy From You Specifically?",
            estimate: "Attitude towards your company",
            guidance:
                "Do prospects trust you, your product, track record, security standards, customer service, ability to scale, etc.",
            read_more_url: "TBD",
            read_more_label: "TBD",
            options: vec![
                // Weight zero is the single disqualifying answer in the rubric.
                CategoryOption {
                    weight: 0.0,
                    label: "0: They cannot buy from you",
                },
                CategoryOption {
                    weight: 0.1,
                    label: "0.1: Serious trust challenges",
                },
                CategoryOption {
                    weight: 0.5,
                    label: "0.5: Indifferent or low-trust product",
                },
                CategoryOption {
                    weight: 1.0,
                    label: "1.0: Emotional desire to select you",
                },
            ],
        },
        Category {
            key: "eager_versus_competition",
            label: "Eager To Buy From You Versus Competition?",
            estimate: "Competitive differentiation",
            guidance:
                "Do you have something unique and does a big chunk of the market care about that thing?",
            read_more_url: "https://longform.asmartbear.com/willingness-to-pay/",
            read_more_label: "Willingness to Pay",
            options: vec![
                CategoryOption {
                    weight: 0.1,
                    label: "0.1: No material differentiation",
                },
                CategoryOption {
                    weight: 0.5,
                    label: "0.5: Some best-in-class features",
                },
                CategoryOption {
                    weight: 1.0,
                    label: "1.0: No viable alternative",
                },
            ],
        },
        Category {
            key: "enduring",
            label: "Enduring",
            estimate: "Will they still be a customer a year from now?",
            guidance:
                "5%/mo cancellation means only half the customers will still be customers a year from now. One-time revenue businesses still need repeat revenue",
            read_more_url:
                "https://cloud.substack.com/p/my-top-10-mistakes-in-10-years-gainsight#%C2%A7mistake-not-starting-act-ii-fast-enough",
            read_more_label: "Impossible to become a scale-up unicorn with high churn",
            options: vec![
                CategoryOption {
                    weight: 0.01,
                    label: "0.01: One-off purchase without loyalty",
                },
                CategoryOption {
                    weight: 0.1,
                    label: "0.1: One-off purchase with evangelism",
                },
                CategoryOption {
                    weight: 0.5,
                    label: "0.5: Recurring revenue or problem",
                },
                CategoryOption {
                    weight: 1.0,
                    label: "1.0: Strong lock-in",
                },
            ],
        },
    ]
}
