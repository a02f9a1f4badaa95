use crate::domain::model::{RegulationQuery, SearchType};

/// Builds the instruction sent to the text-generation service.
pub fn build_prompt(query: &RegulationQuery) -> String {
    match query.category {
        SearchType::Tourist => tourist_prompt(&query.origin, &query.destination),
        SearchType::Resident => resident_prompt(&query.origin, &query.destination),
    }
}

fn tourist_prompt(origin: &str, destination: &str) -> String {
    format!(
        r#"Act as an international transport and legal consultant.
I have a driver's license from **{origin}**.
I am planning to visit **{destination}** as a **tourist** (short-term stay).

Please find the most recent and official regulations regarding driving requirements.

Structure your response in Markdown:
1. **IDP Requirement**: Clearly state if an International Driving Permit (IDP) is REQUIRED, RECOMMENDED, or NOT NEEDED.
2. **Key Rules**: Briefly explain the specific rule (e.g., "Drivers from EU do not need...", "Must carry translation...").
3. **Driving Side**: Clearly state if they drive on the **LEFT** or **RIGHT** side of the road.
4. **Validity**: How long can I drive with my foreign license?
5. **Emergency Numbers**: List the main emergency numbers (Police, Ambulance) for {destination}.
6. **Essential Vocabulary**: Create a Markdown Table with 5 key driving words in the local language of {destination} (e.g., Exit, Toll, Danger, One Way) and their English translation.
7. **Pro Tip**: One specific, non-obvious advice for driving in {destination} (e.g., specific right-of-way rules, flashes, or fines).

Use Google Search to ensure the information is current."#
    )
}

fn resident_prompt(origin: &str, destination: &str) -> String {
    format!(
        r#"Act as an immigration and vehicle licensing expert.
I have a driver's license from **{origin}**.
I am moving to **{destination}** to become a **resident**.

Please find the official reciprocal license exchange agreements.

Structure your response in Markdown:
1. **Exchange Agreement**: Is there a direct exchange agreement? (YES / NO / CONDITIONAL).
2. **The Process**: Detailed steps to exchange the license without taking a new test (if possible).
3. **Driving Side**: Clearly state if they drive on the **LEFT** or **RIGHT** side of the road.
4. **Requirements**: What documents are needed? (e.g., Translation, Certificate of Authenticity, Medical check).
5. **Deadlines**: Is there a specific timeframe after arrival when I MUST exchange it?
6. **Essential Vocabulary**: Create a Markdown Table with 5 key driving words in the local language of {destination} (e.g., License, Insurance, Penalty) and their English translation.
7. **Alternatives**: If no agreement exists, what is the process to get a local license?

Use Google Search to verify the latest treaties or transport ministry guidelines."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: SearchType) -> RegulationQuery {
        RegulationQuery {
            origin: "Brazil".to_string(),
            destination: "Portugal".to_string(),
            category,
        }
    }

    #[test]
    fn tourist_prompt_asks_about_idp() {
        let prompt = build_prompt(&query(SearchType::Tourist));
        assert!(prompt.contains("driver's license from **Brazil**"));
        assert!(prompt.contains("visit **Portugal** as a **tourist**"));
        assert!(prompt.contains("International Driving Permit"));
        assert!(prompt.contains("emergency numbers (Police, Ambulance) for Portugal"));
        assert!(!prompt.contains("Exchange Agreement"));
    }

    #[test]
    fn resident_prompt_asks_about_exchange() {
        let prompt = build_prompt(&query(SearchType::Resident));
        assert!(prompt.contains("moving to **Portugal** to become a **resident**"));
        assert!(prompt.contains("Exchange Agreement"));
        assert!(prompt.contains("local language of Portugal"));
        assert!(!prompt.contains("Pro Tip"));
    }
}
