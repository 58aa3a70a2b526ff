// Caffeine beverages: one recipe, two brews, and a condiment hook

use crate::messaging::Narrator;

/// Recipe skeleton shared by every hot drink
pub trait CaffeineBeverage {
    fn name(&self) -> &'static str;

    fn brew(&self, narrator: &mut Narrator);

    fn add_condiments(&self, narrator: &mut Narrator);

    /// Hook deciding whether condiments go in; defaults to yes
    fn customer_wants_condiments(&self) -> bool {
        true
    }

    fn boil_water(&self, narrator: &mut Narrator) {
        narrator.info("Boiling water");
    }

    fn pour_in_cup(&self, narrator: &mut Narrator) {
        narrator.info("Pouring into cup");
    }

    /// Runs the recipe; returns whether condiments were added
    fn prepare_recipe(&self, narrator: &mut Narrator) -> bool {
        self.boil_water(narrator);
        self.brew(narrator);
        self.pour_in_cup(narrator);
        let condiments = self.customer_wants_condiments();
        if condiments {
            self.add_condiments(narrator);
        }
        condiments
    }
}

#[derive(Debug, Default)]
pub struct Tea;

impl CaffeineBeverage for Tea {
    fn name(&self) -> &'static str {
        "Tea"
    }

    fn brew(&self, narrator: &mut Narrator) {
        narrator.info("Steeping the tea");
    }

    fn add_condiments(&self, narrator: &mut Narrator) {
        narrator.info("Adding Lemon");
    }
}

/// Coffee that asks the customer before adding condiments
#[derive(Debug)]
pub struct Coffee {
    wants_condiments: bool,
}

impl Coffee {
    pub fn new(wants_condiments: bool) -> Self {
        Self { wants_condiments }
    }
}

impl CaffeineBeverage for Coffee {
    fn name(&self) -> &'static str {
        "Coffee"
    }

    fn brew(&self, narrator: &mut Narrator) {
        narrator.info("Dripping Coffee through filter");
    }

    fn add_condiments(&self, narrator: &mut Narrator) {
        narrator.info("Adding Sugar and Milk");
    }

    fn customer_wants_condiments(&self) -> bool {
        self.wants_condiments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::NotificationCategory;

    #[test]
    fn test_tea_uses_default_hook() {
        let mut narrator = Narrator::silent(NotificationCategory::Template);
        assert!(Tea.prepare_recipe(&mut narrator));
        assert_eq!(
            narrator.messages(),
            vec!["Boiling water", "Steeping the tea", "Pouring into cup", "Adding Lemon"]
        );
    }

    #[test]
    fn test_coffee_hook_skips_condiments() {
        let mut narrator = Narrator::silent(NotificationCategory::Template);
        assert!(!Coffee::new(false).prepare_recipe(&mut narrator));
        assert_eq!(narrator.last_message(), Some("Pouring into cup"));

        narrator.clear();
        assert!(Coffee::new(true).prepare_recipe(&mut narrator));
        assert_eq!(narrator.last_message(), Some("Adding Sugar and Milk"));
    }
}
