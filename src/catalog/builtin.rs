//! The shipped levels: a to-do app, a small web shop and a social network.

use super::level::{Activity, Difficulty, Level};
use super::registry::LevelCatalog;
use crate::cards::{CardKind, Release, StoryCard};
use crate::core::LevelId;

use crate::cards::Release::{Mvp, Release1, Release2};

fn story(id: &str, content: &str, activity: &str, release: Release, points: u32) -> StoryCard {
    StoryCard::new(id, content, CardKind::Story, points).with_answer(activity, release)
}

fn task_master() -> Level {
    const P: u32 = 10;
    Level::new(LevelId::new(1), "Level 1: To-Do List App", Difficulty::Easy)
        .with_description("Organize the user stories for a simple task management app.")
        .with_project("TaskMaster")
        .with_activity(Activity::new("act1", "Create task", 1))
        .with_activity(Activity::new("act2", "Organize tasks", 2))
        .with_activity(Activity::new("act3", "Complete task", 3))
        .with_card(story("card1", "As a user I want to create a new task so I can record what I need to do", "act1", Mvp, P))
        .with_card(story("card2", "As a user I want to add a due date so I don't forget my commitments", "act1", Release1, P))
        .with_card(story("card3", "As a user I want to add a detailed description so I have more context", "act1", Release1, P))
        .with_card(story("card4", "As a user I want to see all my tasks so I get an overview", "act2", Mvp, P))
        .with_card(story("card5", "As a user I want to set a priority so I know what to do first", "act2", Release1, P))
        .with_card(story("card6", "As a user I want to filter tasks by status so I can find them easily", "act2", Release2, P))
        .with_card(story("card7", "As a user I want to mark a task as done so I can see my progress", "act3", Mvp, P))
        .with_card(story("card8", "As a user I want to archive finished tasks so my list stays clean", "act3", Release2, P))
        .with_explanation(
            "Great work! You mapped the flow of a to-do app. Notice how the MVP holds only \
             the essentials: create, view and complete tasks. Improvements such as due dates, \
             priorities and filters arrive in later releases.",
        )
        .with_tip("The MVP must support the most basic end-to-end flow")
        .with_tip("Creating and viewing tasks usually come first")
        .with_tip("Advanced features such as filters belong in later releases")
}

fn shop_simple() -> Level {
    const P: u32 = 15;
    Level::new(LevelId::new(2), "Level 2: Basic E-commerce", Difficulty::Medium)
        .with_description("Build the story map for a simple online store.")
        .with_project("ShopSimple")
        .with_activity(Activity::new("act1", "Browse products", 1))
        .with_activity(Activity::new("act2", "Manage cart", 2))
        .with_activity(Activity::new("act3", "Check out", 3))
        .with_activity(Activity::new("act4", "Track order", 4))
        .with_card(story("card1", "As a shopper I want to see the product catalog to discover what is available", "act1", Mvp, P))
        .with_card(story("card2", "As a shopper I want to search products by name to find what I need quickly", "act1", Release1, P))
        .with_card(story("card3", "As a shopper I want to filter by category to explore similar products", "act1", Release1, P))
        .with_card(story("card4", "As a shopper I want to read product reviews to make better decisions", "act1", Release2, P))
        .with_card(story("card5", "As a shopper I want to add products to the cart to buy several items", "act2", Mvp, P))
        .with_card(story("card6", "As a shopper I want to change quantities in the cart to adjust my order", "act2", Mvp, P))
        .with_card(story("card7", "As a shopper I want to save products for later to decide another time", "act2", Release2, P))
        .with_card(story("card8", "As a shopper I want to pay by card to complete my purchase", "act3", Mvp, P))
        .with_card(story("card9", "As a shopper I want to pay with PayPal to have more payment options", "act3", Release1, P))
        .with_card(story("card10", "As a shopper I want to apply discount coupons to save money", "act3", Release2, P))
        .with_card(story("card11", "As a shopper I want to see my order status to know when it will arrive", "act4", Mvp, P))
        .with_card(story("card12", "As a shopper I want shipping notifications to stay informed", "act4", Release1, P))
        .with_explanation(
            "Very good! The MVP covers the whole purchase flow: browse, add to cart, pay, \
             check status. Search, extra payment methods and reviews improve the experience \
             in later releases.",
        )
        .with_tip("An e-commerce MVP needs product listing, a cart and payment")
        .with_tip("Search and filters improve UX but are not critical for the MVP")
        .with_tip("Always include one way to pay in the MVP")
}

fn connect_hub() -> Level {
    const P: u32 = 20;
    Level::new(LevelId::new(3), "Level 3: Social Network", Difficulty::Hard)
        .with_description("Design the story map for a full social network.")
        .with_project("ConnectHub")
        .with_activity(Activity::new("act1", "Manage profile", 1))
        .with_activity(Activity::new("act2", "Connect with others", 2))
        .with_activity(Activity::new("act3", "Publish content", 3))
        .with_activity(Activity::new("act4", "Interact", 4))
        .with_activity(Activity::new("act5", "Discover", 5))
        .with_card(story("card1", "As a user I want to create my profile to have a presence on the network", "act1", Mvp, P))
        .with_card(story("card2", "As a user I want to edit my information to keep it up to date", "act1", Mvp, P))
        .with_card(story("card3", "As a user I want to upload a profile picture so people recognize me", "act1", Release1, P))
        .with_card(story("card4", "As a user I want privacy settings to control who sees my info", "act1", Release2, P))
        .with_card(story("card5", "As a user I want to send friend requests to connect with others", "act2", Mvp, P))
        .with_card(story("card6", "As a user I want to accept or reject requests to manage my connections", "act2", Mvp, P))
        .with_card(story("card7", "As a user I want to block users to protect myself from harassment", "act2", Release1, P))
        .with_card(story("card8", "As a user I want to write text posts to share ideas", "act3", Mvp, P))
        .with_card(story("card9", "As a user I want to upload photos to share moments", "act3", Release1, P))
        .with_card(story("card10", "As a user I want to post temporary stories for ephemeral content", "act3", Release2, P))
        .with_card(story("card11", "As a user I want to like posts to show appreciation", "act4", Mvp, P))
        .with_card(story("card12", "As a user I want to comment on posts to join conversations", "act4", Mvp, P))
        .with_card(story("card13", "As a user I want to share posts to spread content", "act4", Release1, P))
        .with_card(story("card14", "As a user I want an activity feed to stay up to date", "act5", Mvp, P))
        .with_card(story("card15", "As a user I want to search for people to find friends", "act5", Release1, P))
        .with_card(story("card16", "As a user I want friend suggestions to grow my network", "act5", Release2, P))
        .with_explanation(
            "Impressive! You handled a complex project. A social network MVP needs to create \
             a profile, connect, publish, interact and discover content. Stories, privacy \
             settings and suggestions enrich the experience but are not critical at first.",
        )
        .with_tip("Social networks need a complete social loop from the MVP")
        .with_tip("Basic interaction (likes, comments) is fundamental")
        .with_tip("Privacy and safety features can wait until release 1")
}

/// Levels shipped with the game, in play order.
#[must_use]
pub fn builtin_levels() -> Vec<Level> {
    vec![task_master(), shop_simple(), connect_hub()]
}

impl LevelCatalog {
    /// The shipped three-level catalog.
    ///
    /// Panics only if the built-in content is edited into an invalid state;
    /// `test_builtin_shape` guards that.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_levels()).expect("builtin catalog must validate")
    }
}
