// ABOUTME: Compiled-in reference foods with per-serving nutrition facts
// ABOUTME: Covers every cuisine and category so meal suggestions always find candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietplan Contributors

//! Static food table. Values are per serving as eaten (cooked where applicable).

use dietplan_core::models::{Cuisine, FoodCategory, FoodItem};

/// Every catalog food, grouped by cuisine then category
pub static FOOD_DATABASE: &[FoodItem] = &[
    // indian protein
    FoodItem {
        name: "Paneer Tikka",
        calories: 265.0,
        protein_g: 18.0,
        carbohydrates_total_g: 6.0,
        fat_total_g: 19.0,
        serving_size_g: 100.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Protein,
        description: "Cottage cheese cubes marinated in spiced yogurt and grilled",
        portion_description: "1 skewer (6 pieces)",
    },
    FoodItem {
        name: "Chicken Tikka",
        calories: 220.0,
        protein_g: 32.0,
        carbohydrates_total_g: 4.0,
        fat_total_g: 8.0,
        serving_size_g: 150.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Protein,
        description: "Boneless chicken pieces roasted in a tandoor with yogurt marinade",
        portion_description: "6 pieces",
    },
    FoodItem {
        name: "Dal Tadka",
        calories: 230.0,
        protein_g: 12.0,
        carbohydrates_total_g: 30.0,
        fat_total_g: 7.0,
        serving_size_g: 200.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Protein,
        description: "Yellow lentils tempered with cumin, garlic and ghee",
        portion_description: "1 cup",
    },
    // indian carb
    FoodItem {
        name: "Basmati Rice",
        calories: 195.0,
        protein_g: 4.1,
        carbohydrates_total_g: 42.5,
        fat_total_g: 0.6,
        serving_size_g: 150.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Carb,
        description: "Steamed long-grain basmati rice",
        portion_description: "1 cup cooked",
    },
    FoodItem {
        name: "Whole Wheat Roti",
        calories: 120.0,
        protein_g: 3.5,
        carbohydrates_total_g: 20.0,
        fat_total_g: 3.1,
        serving_size_g: 40.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Carb,
        description: "Unleavened whole wheat flatbread cooked on a griddle",
        portion_description: "1 medium roti",
    },
    FoodItem {
        name: "Vegetable Poha",
        calories: 180.0,
        protein_g: 3.6,
        carbohydrates_total_g: 32.0,
        fat_total_g: 4.5,
        serving_size_g: 150.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Carb,
        description: "Flattened rice sauteed with onion, peas and turmeric",
        portion_description: "1 plate",
    },
    // indian fat
    FoodItem {
        name: "Ghee",
        calories: 90.0,
        protein_g: 0.0,
        carbohydrates_total_g: 0.0,
        fat_total_g: 10.0,
        serving_size_g: 10.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Fat,
        description: "Clarified butter",
        portion_description: "2 teaspoons",
    },
    FoodItem {
        name: "Cashews",
        calories: 157.0,
        protein_g: 5.2,
        carbohydrates_total_g: 8.6,
        fat_total_g: 12.4,
        serving_size_g: 28.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Fat,
        description: "Raw cashew nuts",
        portion_description: "1 handful (about 18 nuts)",
    },
    FoodItem {
        name: "Coconut Chutney",
        calories: 115.0,
        protein_g: 1.5,
        carbohydrates_total_g: 5.0,
        fat_total_g: 10.0,
        serving_size_g: 50.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Fat,
        description: "Fresh coconut ground with green chili and curry leaves",
        portion_description: "3 tablespoons",
    },
    // indian mixed
    FoodItem {
        name: "Chicken Biryani",
        calories: 400.0,
        protein_g: 22.0,
        carbohydrates_total_g: 48.0,
        fat_total_g: 13.0,
        serving_size_g: 250.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Mixed,
        description: "Layered basmati rice and spiced chicken",
        portion_description: "1 plate",
    },
    FoodItem {
        name: "Masala Dosa",
        calories: 340.0,
        protein_g: 7.0,
        carbohydrates_total_g: 48.0,
        fat_total_g: 13.0,
        serving_size_g: 175.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Mixed,
        description: "Fermented rice crepe filled with spiced potato",
        portion_description: "1 dosa with filling",
    },
    FoodItem {
        name: "Vegetable Khichdi",
        calories: 300.0,
        protein_g: 11.0,
        carbohydrates_total_g: 50.0,
        fat_total_g: 6.0,
        serving_size_g: 250.0,
        cuisine: Cuisine::Indian,
        category: FoodCategory::Mixed,
        description: "Rice and moong dal cooked with vegetables",
        portion_description: "1 bowl",
    },
    // asian protein
    FoodItem {
        name: "Firm Tofu",
        calories: 145.0,
        protein_g: 15.0,
        carbohydrates_total_g: 3.0,
        fat_total_g: 8.7,
        serving_size_g: 100.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Protein,
        description: "Stir-fried firm tofu cubes",
        portion_description: "1/2 cup cubes",
    },
    FoodItem {
        name: "Edamame",
        calories: 188.0,
        protein_g: 18.4,
        carbohydrates_total_g: 13.8,
        fat_total_g: 8.1,
        serving_size_g: 155.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Protein,
        description: "Steamed young soybeans, shelled",
        portion_description: "1 cup shelled",
    },
    FoodItem {
        name: "Teriyaki Salmon",
        calories: 290.0,
        protein_g: 31.0,
        carbohydrates_total_g: 8.0,
        fat_total_g: 14.0,
        serving_size_g: 150.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Protein,
        description: "Salmon fillet glazed with teriyaki sauce",
        portion_description: "1 fillet",
    },
    // asian carb
    FoodItem {
        name: "Jasmine Rice",
        calories: 205.0,
        protein_g: 4.3,
        carbohydrates_total_g: 45.0,
        fat_total_g: 0.4,
        serving_size_g: 158.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Carb,
        description: "Steamed jasmine rice",
        portion_description: "1 cup cooked",
    },
    FoodItem {
        name: "Soba Noodles",
        calories: 113.0,
        protein_g: 5.8,
        carbohydrates_total_g: 24.4,
        fat_total_g: 0.1,
        serving_size_g: 114.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Carb,
        description: "Buckwheat noodles, boiled",
        portion_description: "1 cup cooked",
    },
    FoodItem {
        name: "Rice Noodles",
        calories: 190.0,
        protein_g: 3.2,
        carbohydrates_total_g: 42.0,
        fat_total_g: 0.4,
        serving_size_g: 176.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Carb,
        description: "Flat rice noodles, boiled",
        portion_description: "1 cup cooked",
    },
    // asian fat
    FoodItem {
        name: "Sesame Oil",
        calories: 120.0,
        protein_g: 0.0,
        carbohydrates_total_g: 0.0,
        fat_total_g: 14.0,
        serving_size_g: 14.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Fat,
        description: "Toasted sesame oil",
        portion_description: "1 tablespoon",
    },
    FoodItem {
        name: "Peanut Sauce",
        calories: 130.0,
        protein_g: 4.5,
        carbohydrates_total_g: 6.0,
        fat_total_g: 10.5,
        serving_size_g: 32.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Fat,
        description: "Satay-style peanut sauce",
        portion_description: "2 tablespoons",
    },
    FoodItem {
        name: "Coconut Milk",
        calories: 115.0,
        protein_g: 1.1,
        carbohydrates_total_g: 2.0,
        fat_total_g: 12.0,
        serving_size_g: 60.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Fat,
        description: "Full-fat coconut milk",
        portion_description: "1/4 cup",
    },
    // asian mixed
    FoodItem {
        name: "Chicken Fried Rice",
        calories: 340.0,
        protein_g: 14.0,
        carbohydrates_total_g: 46.0,
        fat_total_g: 11.0,
        serving_size_g: 200.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Mixed,
        description: "Wok-fried rice with chicken, egg and vegetables",
        portion_description: "1 cup",
    },
    FoodItem {
        name: "Pad Thai",
        calories: 430.0,
        protein_g: 18.0,
        carbohydrates_total_g: 55.0,
        fat_total_g: 15.0,
        serving_size_g: 250.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Mixed,
        description: "Rice noodles stir-fried with egg, tofu and peanuts",
        portion_description: "1 plate",
    },
    FoodItem {
        name: "Miso Soup with Tofu",
        calories: 85.0,
        protein_g: 6.0,
        carbohydrates_total_g: 8.0,
        fat_total_g: 3.5,
        serving_size_g: 240.0,
        cuisine: Cuisine::Asian,
        category: FoodCategory::Mixed,
        description: "Miso broth with tofu, seaweed and scallions",
        portion_description: "1 bowl",
    },
    // general protein
    FoodItem {
        name: "Grilled Chicken Breast",
        calories: 165.0,
        protein_g: 31.0,
        carbohydrates_total_g: 0.0,
        fat_total_g: 3.6,
        serving_size_g: 100.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Protein,
        description: "Skinless chicken breast, grilled",
        portion_description: "1 palm-sized piece",
    },
    FoodItem {
        name: "Boiled Eggs",
        calories: 155.0,
        protein_g: 12.6,
        carbohydrates_total_g: 1.1,
        fat_total_g: 10.6,
        serving_size_g: 100.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Protein,
        description: "Hard-boiled whole eggs",
        portion_description: "2 large eggs",
    },
    FoodItem {
        name: "Greek Yogurt",
        calories: 100.0,
        protein_g: 17.0,
        carbohydrates_total_g: 6.0,
        fat_total_g: 0.7,
        serving_size_g: 170.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Protein,
        description: "Plain nonfat Greek yogurt",
        portion_description: "1 container",
    },
    // general carb
    FoodItem {
        name: "Oatmeal",
        calories: 166.0,
        protein_g: 5.9,
        carbohydrates_total_g: 28.0,
        fat_total_g: 3.6,
        serving_size_g: 234.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Carb,
        description: "Rolled oats cooked in water",
        portion_description: "1 cup cooked",
    },
    FoodItem {
        name: "Baked Sweet Potato",
        calories: 103.0,
        protein_g: 2.3,
        carbohydrates_total_g: 24.0,
        fat_total_g: 0.2,
        serving_size_g: 114.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Carb,
        description: "Sweet potato baked in its skin",
        portion_description: "1 medium",
    },
    FoodItem {
        name: "Banana",
        calories: 105.0,
        protein_g: 1.3,
        carbohydrates_total_g: 27.0,
        fat_total_g: 0.4,
        serving_size_g: 118.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Carb,
        description: "Fresh ripe banana",
        portion_description: "1 medium",
    },
    // general fat
    FoodItem {
        name: "Almonds",
        calories: 164.0,
        protein_g: 6.0,
        carbohydrates_total_g: 6.1,
        fat_total_g: 14.2,
        serving_size_g: 28.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Fat,
        description: "Raw whole almonds",
        portion_description: "1 handful (about 23 nuts)",
    },
    FoodItem {
        name: "Avocado",
        calories: 160.0,
        protein_g: 2.0,
        carbohydrates_total_g: 8.5,
        fat_total_g: 14.7,
        serving_size_g: 100.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Fat,
        description: "Fresh Hass avocado",
        portion_description: "1/2 avocado",
    },
    FoodItem {
        name: "Olive Oil",
        calories: 119.0,
        protein_g: 0.0,
        carbohydrates_total_g: 0.0,
        fat_total_g: 13.5,
        serving_size_g: 14.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Fat,
        description: "Extra virgin olive oil",
        portion_description: "1 tablespoon",
    },
    // general mixed
    FoodItem {
        name: "Turkey Sandwich",
        calories: 350.0,
        protein_g: 24.0,
        carbohydrates_total_g: 38.0,
        fat_total_g: 10.0,
        serving_size_g: 200.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Mixed,
        description: "Sliced turkey on whole grain bread with vegetables",
        portion_description: "1 sandwich",
    },
    FoodItem {
        name: "Quinoa Salad",
        calories: 280.0,
        protein_g: 9.0,
        carbohydrates_total_g: 36.0,
        fat_total_g: 11.0,
        serving_size_g: 200.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Mixed,
        description: "Quinoa with chickpeas, cucumber and olive oil dressing",
        portion_description: "1 bowl",
    },
    FoodItem {
        name: "Lentil Soup",
        calories: 230.0,
        protein_g: 15.0,
        carbohydrates_total_g: 35.0,
        fat_total_g: 3.0,
        serving_size_g: 250.0,
        cuisine: Cuisine::General,
        category: FoodCategory::Mixed,
        description: "Brown lentils simmered with carrots and celery",
        portion_description: "1 bowl",
    },
];
