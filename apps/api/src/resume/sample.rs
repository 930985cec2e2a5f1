/// Resume shown on startup and restored by "load example".
pub const DEFAULT_RESUME: &str = "JONATHAN DOE
Software Engineer | San Francisco, CA

PROFESSIONAL EXPERIENCE

TECH SOLUTIONS INC. | Senior Software Engineer
2020 - Present

- Led a cross-functional team of 8 engineers to migrate a legacy monolithic application to a microservices architecture.
- Designed and implemented a real-time data processing pipeline using Apache Kafka, reducing data latency by 45%.
- Optimized database queries and indexing strategies, resulting in a 30% improvement in API response times.
- Orchestrated the deployment of a CI/CD pipeline using GitHub Actions, decreasing release cycles from bi-weekly to daily.

GLOBAL DATA CORP | Full Stack Developer
2018 - 2020

- Developed a customer-facing analytics dashboard using React and D3.js, serving 50,000+ monthly active users.
- Automated repetitive internal workflows using Python scripts, saving the operations team 15+ hours per week.
- Collaborated with product managers to define and ship 12+ new features focused on user engagement.

SKILLS
React, TypeScript, Node.js, PostgreSQL, AWS, Docker, Kubernetes, Python";
