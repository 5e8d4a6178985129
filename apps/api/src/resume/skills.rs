use std::collections::HashMap;

use serde::Serialize;

use crate::models::content::SkillRow;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillItem {
    pub id: i64,
    pub name: String,
    pub order: i32,
}

/// Skills sharing a category key. `order` is the minimum order of its members.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub name_key: String,
    pub color: String,
    pub order: i32,
    pub skills: Vec<SkillItem>,
}

/// Groups skills by category key.
///
/// Categories come out sorted by `(order, key)`; skills inside a category keep
/// their own `(order, name)` order. Display name and color are taken from the
/// lowest-ordered member.
pub fn group_skills(skills: &[SkillRow]) -> Vec<SkillCategory> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut categories: Vec<(SkillCategory, (i32, &str))> = Vec::new();

    for skill in skills {
        let item = SkillItem {
            id: skill.id,
            name: skill.name.clone(),
            order: skill.sort_order,
        };
        match index.get(skill.category_key.as_str()) {
            Some(&i) => {
                let (category, lead) = &mut categories[i];
                if (skill.sort_order, skill.name.as_str()) < *lead {
                    category.name = skill.category_name.clone();
                    category.color = skill.category_color.clone();
                    *lead = (skill.sort_order, skill.name.as_str());
                }
                category.order = category.order.min(skill.sort_order);
                category.skills.push(item);
            }
            None => {
                index.insert(skill.category_key.as_str(), categories.len());
                categories.push((
                    SkillCategory {
                        id: skill.category_key.clone(),
                        name: skill.category_name.clone(),
                        name_key: skill.category_key.clone(),
                        color: skill.category_color.clone(),
                        order: skill.sort_order,
                        skills: vec![item],
                    },
                    (skill.sort_order, skill.name.as_str()),
                ));
            }
        }
    }

    let mut categories: Vec<SkillCategory> = categories.into_iter().map(|(c, _)| c).collect();
    for category in &mut categories {
        category
            .skills
            .sort_by(|a, b| (a.order, &a.name).cmp(&(b.order, &b.name)));
    }
    categories.sort_by(|a, b| (a.order, &a.id).cmp(&(b.order, &b.id)));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: i64, name: &str, key: &str, category: &str, order: i32) -> SkillRow {
        SkillRow {
            id,
            locale: "en".to_string(),
            name: name.to_string(),
            category_name: category.to_string(),
            category_key: key.to_string(),
            category_color: format!("color-{key}-{order}"),
            sort_order: order,
        }
    }

    #[test]
    fn test_category_order_is_min_member_order() {
        let skills = vec![
            skill(1, "Rust", "backend", "Backend", 30),
            skill(2, "Go", "backend", "Backend", 10),
            skill(3, "React", "frontend", "Frontend", 20),
            skill(4, "Python", "backend", "Backend", 50),
        ];
        let categories = group_skills(&skills);

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "backend");
        assert_eq!(categories[0].order, 10);
        assert_eq!(categories[1].id, "frontend");
        assert_eq!(categories[1].order, 20);
        for category in &categories {
            let min = category.skills.iter().map(|s| s.order).min().unwrap();
            assert_eq!(category.order, min);
        }
    }

    #[test]
    fn test_skills_keep_their_order_within_category() {
        let skills = vec![
            skill(1, "Rust", "backend", "Backend", 30),
            skill(2, "Go", "backend", "Backend", 10),
            skill(3, "Axum", "backend", "Backend", 30),
        ];
        let names: Vec<_> = group_skills(&skills)[0]
            .skills
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, ["Go", "Axum", "Rust"]);
    }

    #[test]
    fn test_name_and_color_from_lowest_member() {
        let skills = vec![
            skill(1, "Rust", "backend", "Server side", 30),
            skill(2, "Go", "backend", "Backend", 10),
        ];
        let category = &group_skills(&skills)[0];
        assert_eq!(category.name, "Backend");
        assert_eq!(category.color, "color-backend-10");
        assert_eq!(category.name_key, "backend");
    }

    #[test]
    fn test_sparse_and_tied_orders() {
        let skills = vec![
            skill(1, "A", "zeta", "Zeta", 100),
            skill(2, "B", "alpha", "Alpha", 100),
            skill(3, "C", "mid", "Mid", -5),
        ];
        let ids: Vec<_> = group_skills(&skills).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_empty() {
        assert!(group_skills(&[]).is_empty());
    }
}
