//! Built-in catalog of the Swedish environmental milestone targets
//! (etappmål) and the SCB statistics tables that back them.
//!
//! `etapp init` seeds the store from these tables. A handful of milestones
//! carry a goal spec tying them to a baseline measurement and a fractional
//! reduction target; the rest are tracked by their curated progress number
//! until a source is linked.

use serde_json::{Value, json};

use crate::domain::{Milestone, SourceRow};

fn entry(
    id: u32,
    title: &str,
    category: &str,
    progress: u32,
    description: &str,
    goal: Option<Value>,
) -> Milestone {
    Milestone {
        id,
        title: title.to_string(),
        category: Some(category.to_string()),
        description: Some(description.to_string()),
        progress,
        goal,
    }
}

/// The twenty milestone targets under the Swedish environmental objectives
/// system, with curated starting progress.
pub fn builtin_milestones() -> Vec<Milestone> {
    vec![
        entry(
            1,
            "Emissions of greenhouse gases by 2030",
            "Reduced climate impact",
            65,
            "Emissions in Sweden outside of the EU ETS should at latest by 2030 be at least 63 per cent lower than emissions in 1990. To achieve the goal, no more than 8 percentage points of the emissions reductions may be realised through supplementary measures.",
            Some(json!({
                "series": [43.0],
                "categories": [1990, 2030],
                "change": [0.63],
            })),
        ),
        entry(
            2,
            "Emissions of greenhouse gases by 2040",
            "Reduced climate impact",
            45,
            "Emissions in Sweden outside of the EU ETS should at latest by 2040 be at least 75 per cent lower than emissions in 1990. To achieve the goal, no more than 2 percentage points of the emissions reductions may be realised through supplementary measures.",
            Some(json!({
                "series": [43.0],
                "categories": [1990, 2040],
                "change": [0.75],
            })),
        ),
        entry(
            3,
            "Emissions of greenhouse gases by 2045",
            "Reduced climate impact",
            78,
            "At latest by 2045, Sweden is to have no net emissions of greenhouse gases into the atmosphere and should thereafter achieve negative emissions. To achieve zero net emissions, supplementary measures may be counted. By 2045, emissions from activities in Swedish territory are to be at least 85 per cent lower than emissions in 1990.",
            Some(json!({
                "series": [71.4],
                "categories": [1990, 2045],
                "change": [0.85],
            })),
        ),
        entry(
            4,
            "Emissions of greenhouse gases from domestic transport",
            "Reduced climate impact",
            32,
            "Emissions from domestic transport, excluding domestic aviation, are to be reduced by at least 70 per cent at latest by 2030 compared with 2010. Domestic aviation is not included in the goal since domestic aviation is included in the EU ETS.",
            Some(json!({
                "series": [20.0],
                "categories": [2010, 2030],
                "change": [0.7],
            })),
        ),
        entry(
            5,
            "Reduction of national emissions of air pollutants",
            "Air pollution",
            85,
            "Emissions of nitrogen oxides, sulphur dioxide, volatile organic compounds, ammonia and particulate matter (PM2.5) shall no later than in 2025 correspond to indicative emission levels for 2025 set out in Directive (EU) 2016/2284 of the European Parliament and of the Council on the reduction of national emissions of certain atmospheric pollutants, amending Directive 2003/35/EC and repealing Directive 2001/81/EC.",
            None,
        ),
        entry(
            6,
            "Reuse of packaging",
            "Circular economy",
            92,
            "The proportion of packaging placed on the Swedish market for the first time that is reusable must increase by at least 20 percent from 2022 to 2026 and by at least 30 percent from 2022 to 2030. In Sweden, packaging is the single biggest use for plastics by weight, according to a study from 2019. According to the Swedish EPA the amount of packaging placed on the market and covered by the EPR system for packaging has increased by 28 percent from 1 045 400 tonnes to 1 340 400 tonnes between 2012 and 2018. This increase cannot simply be explained by population growth since the amount of packaging per person increased by 17 percent over the same period. In order for packaging to be reusable it needs to be refilled or reused for the same purpose. This means that a particular piece of packaging needs to be used again as the same type of packaging. The idea is that the milestone target will lead to behavior change among consumers and other parts of the supply chain in order to ensure that packaging is reused over and over before becoming waste or is recycled. The milestone target will be monitored by the Swedish EPA in cooperation with other relevant public authorities.",
            None,
        ),
        entry(
            7,
            "Reduce the use of biocidal products",
            "Dangerous substances",
            38,
            "The main objective of this milestone target is to reduce the environmental and health risks associated with the use of biocidal products. The use of biocidal products with particularly hazardous properties is to be significantly reduced by 2030.",
            None,
        ),
        entry(
            8,
            "Reduce the use of plant protection products",
            "Dangerous substances",
            55,
            "The main objective of this milestone target is to reduce the environmental and health risks associated with the use of plant protection products. The use of plant protection products with particularly hazardous properties will be significantly reduced by 2030.",
            None,
        ),
        entry(
            9,
            "Pharmaceuticals in the environment",
            "Dangerous substances",
            42,
            "The main purpose of the milestone target on pharmaceuticals in the environment is to minimise pharmaceutical residues in the environment. Regulations and other measures that minimise the negative environmental effects must be in place in Sweden, in the EU or internationally by 2030 at the latest.",
            None,
        ),
        entry(
            10,
            "Emissions of dioxins",
            "Dangerous substances",
            71,
            "The main purpose of this milestone target is to map emissions of dioxin. Measures against these sources are intended to reduce the levels in the environment and in the long run protect people and the environment. By 2030 at the latest, emissions of dioxin from point sources must be mapped and minimised.",
            None,
        ),
        entry(
            11,
            "Proportion of pedestrian, bicycle and public transport",
            "Sustainable urban development",
            48,
            "The proportion of personal journeys using public transport, cycling or walking in Sweden must be at least 25 percent by 2025, expressed in person kilometres travelled, with a view to doubling in the long term the proportion for pedestrian, bicycle and public transport.",
            None,
        ),
        entry(
            12,
            "Integration of urban greenery and ecosystem services into urban environments",
            "Sustainable urban development",
            67,
            "The majority of the municipalities must utilise and integrate urban greenery and ecosystem services into urban environments in the planning, building and administration of towns and cities and densely populated areas by no later than 2025.",
            None,
        ),
        entry(
            13,
            "Urban runoff",
            "Sustainable urban development",
            58,
            "The municipalities where there is a risk of significant impact of urban runoff on soil, water and the physical environment in existing urban areas have carried out a survey and developed action plans for urban runoff by 2025 and have begun the implementation of the plans.",
            None,
        ),
        entry(
            14,
            "Increased separation and biological treatment of food waste",
            "Waste",
            29,
            "By 2023 at least 75 percent of food waste from households, catering services, shops and restaurants shall be separated and treated biologically so that nutrients and biogas are utilized.",
            None,
        ),
        entry(
            15,
            "Good Urban Environment",
            "Waste",
            63,
            "Cities, towns and other built-up areas should provide a healthy and good living environment and contribute to regional sustainable development.",
            None,
        ),
        entry(
            16,
            "Construction and demolition waste",
            "Waste",
            41,
            "Preparation for the reuse, recycling and other material recovery of non-hazardous construction and demolition waste, with the exception of soil and stone, shall amount to at least 70 percent by weight annually until 2025.",
            None,
        ),
        entry(
            17,
            "Increase the proportion of municipal waste that is recycled and prepared for reuse",
            "Waste",
            34,
            "By 2025, the amount of municipal waste that is prepared for re-use and recycled shall increase to a minimum of 55 percent by weight, by 2030 to a minimum of 60 percent by weight and by 2035 to a minimum of 65 percent by weight.",
            None,
        ),
        entry(
            18,
            "Food waste",
            "Food loss and waste prevention",
            76,
            "From 2020 to 2025, the total amount of food waste should be reduced by at least 20 percent by weight per capita. This means that food waste prevention measures must be taken to reduce the total amount of food waste along the whole food supply chain. Food waste, according to the EU definition, is food that has become waste. Per definition food waste arises mainly at the retail and consumer level. The FAO, definition of food loss and waste is the decrease in quantity or quality of food along the food supply chain. The milestone target will be monitored by Swedish Environmental Protection Agency based on the data produced for EU reporting on the amount of food waste generated per stage of the food supply chain.",
            Some(json!({
                "series": [95.0],
                "categories": [2020, 2025],
                "change": [0.2],
            })),
        ),
        entry(
            19,
            "Food loss",
            "Food loss and waste prevention",
            54,
            "By 2025, an increased share of the food production should reach retailers and consumers. This means that food losses need to decrease, so that more of what is produced to become food goes further along in the food chain and is not left in the field or become animal feed or waste. The goal is to reduce food loss at the production levels such as primary production and food industry. But the responsibility for reaching the goal is shared by all actors in the entire food chain, right up to the byers and consumers, since they also play an important role in reducing the food losses in the production. The level of ambition is set based on SDG 12.3 in Agenda 2030 but ensures a higher pace as it aims for the year 2025. The level of reduction is not set since the follow-up methodology is under development. Monitoring by the Swedish Board of Agriculture will start during base year 2021.",
            None,
        ),
        entry(
            20,
            "Reduced eutrophication",
            "Eutrophication",
            14,
            "The milestone target means that by 2030 manure is increasingly utilised in a resource-efficient manner so that both the losses of nitrogen to air and water and the losses of phosphorus to water are steadily reduced over time through an annual follow-up, it is ensured that the input of nitrogen and phosphorus to water is reduced over time in accordance with Sweden's commitments in the action plan for the Baltic Sea, and that these reduction commitments are achieved within set time frames through an annual follow-up, it is ensured that the emissions of ammonia to air is reduced in accordance with Sweden's commitments in Directive 2016/2284/EU and that this reduction commitment is reached within set time frames.",
            None,
        ),
    ]
}

/// SCB statistics tables feeding the goal-backed milestones.
///
/// Source 5 ships inactive: the air-pollutant table changed layout in 2024
/// and needs a new query before it is worth fetching again.
pub fn builtin_sources() -> Vec<SourceRow> {
    vec![
        SourceRow {
            id: 1,
            url: "https://api.scb.se/OV0104/v1/doris/sv/ssd/START/MI/MI0107/TotaltUtslappN".to_string(),
            active: true,
            milestone_id: Some(1),
        },
        SourceRow {
            id: 2,
            url: "https://api.scb.se/OV0104/v1/doris/sv/ssd/START/MI/MI0107/MI0107Vaxthusgas".to_string(),
            active: true,
            milestone_id: Some(3),
        },
        SourceRow {
            id: 3,
            url: "https://api.scb.se/OV0104/v1/doris/sv/ssd/START/MI/MI0107/UtslappInrikesTransp".to_string(),
            active: true,
            milestone_id: Some(4),
        },
        SourceRow {
            id: 4,
            url: "https://api.scb.se/OV0104/v1/doris/sv/ssd/START/MI/MI0305/MatavfallVikt".to_string(),
            active: true,
            milestone_id: Some(18),
        },
        SourceRow {
            id: 5,
            url: "https://api.scb.se/OV0104/v1/doris/sv/ssd/START/MI/MI0108/UtslappLuft".to_string(),
            active: false,
            milestone_id: Some(5),
        },
    ]
}
