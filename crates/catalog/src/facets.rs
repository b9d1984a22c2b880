use agent_protocol::{Agent, Facets, PopularFacets};
use std::collections::{BTreeSet, HashMap};

const POPULAR_CATEGORIES: usize = 8;
const POPULAR_TOOLS: usize = 12;
const POPULAR_TAGS: usize = 15;

/// Collect the unique facet values across the catalog, alphabetically
/// sorted for stable rendering.
pub fn build_facets(agents: &[Agent]) -> Facets {
    let mut categories = BTreeSet::new();
    let mut tools = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut industries = BTreeSet::new();

    for agent in agents {
        categories.extend(agent.categories.iter().cloned());
        tools.extend(agent.tools.iter().cloned());
        tags.extend(agent.tags.iter().cloned());
        industries.extend(agent.industries.iter().cloned());
    }

    Facets {
        categories: categories.into_iter().collect(),
        tools: tools.into_iter().collect(),
        tags: tags.into_iter().collect(),
        industries: industries.into_iter().collect(),
    }
}

/// Rank facet values by how many listings carry them.
pub fn popular_facets(agents: &[Agent]) -> PopularFacets {
    let mut categories: HashMap<&str, usize> = HashMap::new();
    let mut tools: HashMap<&str, usize> = HashMap::new();
    let mut tags: HashMap<&str, usize> = HashMap::new();

    for agent in agents {
        for c in &agent.categories {
            *categories.entry(c).or_insert(0) += 1;
        }
        for t in &agent.tools {
            *tools.entry(t).or_insert(0) += 1;
        }
        for t in &agent.tags {
            *tags.entry(t).or_insert(0) += 1;
        }
    }

    PopularFacets {
        categories: rank_by_count(categories, POPULAR_CATEGORIES),
        tools: rank_by_count(tools, POPULAR_TOOLS),
        tags: rank_by_count(tags, POPULAR_TAGS),
    }
}

fn rank_by_count(counts: HashMap<&str, usize>, limit: usize) -> Vec<String> {
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Alphabetical tie-break keeps the ranking deterministic across runs.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(value, _)| value.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn agent(id: &str, categories: &[&str], tools: &[&str], tags: &[&str]) -> Agent {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id,
            "categories": categories,
            "tools": tools,
            "tags": tags,
        }))
        .unwrap()
    }

    #[test]
    fn facets_are_unique_and_sorted() {
        let agents = vec![
            agent("a1", &["Sales", "Support"], &["slack"], &["crm"]),
            agent("a2", &["Support"], &["gmail", "slack"], &["crm", "email"]),
        ];

        let facets = build_facets(&agents);

        assert_eq!(facets.categories, vec!["Sales", "Support"]);
        assert_eq!(facets.tools, vec!["gmail", "slack"]);
        assert_eq!(facets.tags, vec!["crm", "email"]);
        assert_eq!(facets.industries, Vec::<String>::new());
    }

    #[test]
    fn popular_facets_rank_by_frequency() {
        let agents = vec![
            agent("a1", &["Support"], &["slack"], &["crm"]),
            agent("a2", &["Support"], &["gmail"], &["crm"]),
            agent("a3", &["Sales"], &["gmail"], &["email"]),
        ];

        let popular = popular_facets(&agents);

        assert_eq!(popular.categories[0], "Support");
        assert_eq!(popular.tags[0], "crm");
    }

    #[test]
    fn popular_facets_respect_caps() {
        let mut agents = Vec::new();
        for i in 0..30 {
            let id = format!("a{i}");
            let tag = format!("tag-{i}");
            agents.push(agent(&id, &[], &[], &[tag.as_str()]));
        }

        let popular = popular_facets(&agents);

        assert_eq!(popular.tags.len(), POPULAR_TAGS);
    }
}
