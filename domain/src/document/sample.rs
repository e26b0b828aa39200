//! Built-in sample document
//!
//! Used when the user supplies no text of their own.

/// A fictional resume used as the fallback document
pub const SAMPLE_RESUME: &str = "\
Education
Northfield Institute of Technology, Aug 2021 - June 2025
B.Tech in Computer Science and Engineering (Data Science Specialization), CGPA: 8.4

Skills
- Programming & Tools: Rust, Python, SQL, Git, Docker
- Frameworks & Libraries: Tokio, Axum, NumPy, Pandas, PyTorch
- Data & Visualization: PostgreSQL, Grafana, Tableau
- Machine Learning & NLP: Supervised/Unsupervised Learning, CNN, RNN, Transformers
- Soft Skills: Collaboration, Communication, Problem-Solving

Achievements
- Solved 300+ data structures and algorithms problems covering graphs, DP and hashing.
- Finalist, regional inter-college hackathon 2024.

Projects
Log Search Engine (Rust, Tokio)
- Built an inverted-index log search service handling 50k lines/sec on a single core.
- Reduced p99 query latency by 40% by replacing a global lock with sharded maps.

Book Recommender System (Python, Flask, ML)
- Engineered a collaborative-filtering recommender over a 2M+ ratings dataset.
- Deployed behind a REST API with a responsive UI.

Document Q&A Assistant (LLM Integration)
- Built a retrieval-backed question-answering tool with grounded, citation-only answers.
- Achieved 90% answer accuracy on an internal benchmark of 200 questions.

Positions of Responsibility
Organising Committee Member, Tech Fest 2024
- Planned and ran the flagship treasure hunt event for 400+ participants.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn test_sample_is_a_valid_document() {
        let doc = Document::try_new(SAMPLE_RESUME).unwrap();
        assert!(doc.text().contains("Skills"));
        assert!(doc.text().contains("Projects"));
    }
}
