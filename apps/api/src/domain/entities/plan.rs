use serde::Deserialize;

/// A sellable plan, keyed by its payment-provider price id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Plan {
    pub price_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// Parse the `STRIPE_PLANS` JSON list (`[{"price_id": "...", "name": "..."}]`).
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::new)
    }

    pub fn name_for(&self, price_id: Option<&str>) -> Option<&str> {
        let price_id = price_id?;
        self.plans
            .iter()
            .find(|plan| plan.price_id == price_id)
            .map(|plan| plan.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_plan_name_by_price_id() {
        let catalog = PlanCatalog::from_json(
            r#"[{"price_id":"price_basic","name":"Starter"},{"price_id":"price_pro","name":"Advanced"}]"#,
        )
        .unwrap();

        assert_eq!(catalog.name_for(Some("price_pro")), Some("Advanced"));
        assert_eq!(catalog.name_for(Some("price_other")), None);
        assert_eq!(catalog.name_for(None), None);
    }

    #[test]
    fn rejects_malformed_plan_list() {
        assert!(PlanCatalog::from_json(r#"{"price_id":"x"}"#).is_err());
    }
}
