use bank::Food;

/// `1. beef`, `2. noodles`, ... one line per comma separated segment.
pub fn ingredient_lines(food: &Food) -> Vec<String> {
    food.ingredients()
        .enumerate()
        .map(|(index, ingredient)| format!("{}. {ingredient}", index + 1))
        .collect()
}

pub fn render_food(food: &Food) -> String {
    let mut out = format!("{}  [{}]\n", food.name, food.id);

    for line in ingredient_lines(food) {
        out.push_str(&format!("    {line}\n"));
    }

    out
}

pub fn render_foods(foods: &[Food], editing: Option<&Food>) -> String {
    let mut out = String::from("Saved Recipes:\n");

    if foods.is_empty() {
        out.push_str("  (none)\n");
    }

    for food in foods {
        let marker = match editing {
            Some(editing) if editing.id == food.id => "* ",
            _ => "",
        };

        out.push('\n');
        out.push_str(marker);
        out.push_str(&render_food(food));
    }

    out
}
