//! # Sheetwise CLI Application
//!
//! Terminal-based interface for drywall material and cost estimates.
//! Prompts for room geometry and job options, runs all five estimators,
//! and prints a combined report plus JSON for LLM/API use.
//!
//! Every prompt falls back to the calculator's standard defaults, so
//! pressing Enter through the whole form estimates the reference
//! 12x10x8 room.

use std::io::{self, BufRead, Write};

use drywall_core::cost_rates::{FinishLevel, ProjectType};
use drywall_core::estimators::{
    cost, mud, screws, sheets, tape, CornerLayout, CostInput, EstimateOutput, MudInput,
    ScrewsInput, SheetsInput, TapeInput,
};
use drywall_core::materials::{MudType, SheetSize, StudSpacing};
use drywall_core::session::EstimateSession;
use drywall_core::EstimateError;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Read a catalog key; empty input keeps the default. Unrecognized keys are
/// handled by the catalog's fallback constructors.
fn prompt_key(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn print_error(e: &EstimateError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    println!("Sheetwise CLI - Drywall Material Estimator");
    println!("==========================================");
    println!();

    // === Room Geometry ===
    let length_ft = prompt_f64("Room length (ft) [12.0]: ", 12.0);
    let width_ft = prompt_f64("Room width (ft) [10.0]: ", 10.0);
    let ceiling_height_ft = prompt_f64("Ceiling height (ft) [8.0]: ", 8.0);
    let include_walls = prompt_bool("Include walls? (y/n) [y]: ", true);
    let include_ceiling = prompt_bool("Include ceiling? (y/n) [y]: ", true);
    let doors = prompt_u32("Number of doors [2]: ", 2);
    let windows = prompt_u32("Number of windows [1]: ", 1);
    let other_openings_sqft = prompt_f64("Other openings (sq ft) [0]: ", 0.0);
    let sheet_size = SheetSize::from_key(&prompt_key("Sheet size (4x8/4x10/4x12) [4x8]: ", "4x8"));
    let waste_percent = prompt_u32("Waste allowance (%) [10]: ", 10);
    let stud_spacing = StudSpacing::from_inches(prompt_u32("Stud spacing in inches (16/24) [16]: ", 16));

    let sheets_input = SheetsInput {
        length_ft,
        width_ft,
        ceiling_height_ft,
        include_walls,
        include_ceiling,
        doors,
        windows,
        other_openings_sqft,
        sheet_size,
        waste_percent,
        stud_spacing,
    };

    let sheets_result = match sheets::calculate(&sheets_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    let mut session = EstimateSession::new();
    session.record_sheets(&sheets_result);

    // === Job Options ===
    println!();
    let area_override = prompt_f64("Area for the remaining estimates (sq ft, 0 = room total) [0]: ", 0.0);
    let area_sqft = session.resolve_area(Some(area_override));

    let professional = prompt_bool("Professional installation? (y/n) [n]: ", false);
    let project_type = if professional {
        ProjectType::Professional
    } else {
        ProjectType::Diy
    };
    let finish_level = FinishLevel::from_key(&prompt_key(
        "Finish level (basic/standard/smooth/premium) [standard]: ",
        "standard",
    ));
    let mud_type = MudType::from_key(&prompt_key(
        "Mud type (allPurpose/topping/setting) [allPurpose]: ",
        "allPurpose",
    ));
    let coats = prompt_u32("Number of coats [3]: ", 3);
    let tape_corners = prompt_bool("Tape corners and perimeter? (y/n) [y]: ", true);

    let cost_input = CostInput {
        area_sqft,
        project_type,
        finish_level,
    };
    let mud_input = MudInput {
        area_sqft,
        mud_type,
        coats,
    };
    let screws_input = ScrewsInput {
        area_sqft,
        stud_spacing,
    };
    let tape_input = TapeInput {
        area_sqft,
        corners: tape_corners.then_some(CornerLayout {
            length_ft,
            width_ft,
            ceiling_height_ft,
        }),
    };

    let cost_result = match cost::calculate(&cost_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            return;
        }
    };
    let mud_result = match mud::calculate(&mud_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            return;
        }
    };
    let screws_result = match screws::calculate(&screws_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            return;
        }
    };
    let tape_result = match tape::calculate(&tape_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    // === Report ===
    println!();
    println!("═══════════════════════════════════════");
    println!("  DRYWALL ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Room:");
    println!(
        "  Size:      {:.1} x {:.1} ft, {:.1} ft ceiling",
        length_ft, width_ft, ceiling_height_ft
    );
    println!("  Surfaces:  {}", surfaces_label(include_walls, include_ceiling));
    println!(
        "  Openings:  {} door(s), {} window(s), {:.0} sq ft other",
        doors, windows, other_openings_sqft
    );
    println!();
    println!("Area:");
    println!("  Gross wall:  {:.0} sq ft", sheets_result.gross_wall_area_sqft);
    println!("  Openings:   -{:.0} sq ft", sheets_result.opening_area_sqft);
    println!("  Net wall:    {:.0} sq ft", sheets_result.net_wall_area_sqft);
    println!("  Ceiling:     {:.0} sq ft", sheets_result.ceiling_area_sqft);
    println!(
        "  Total:       {:.0} sq ft ({:.1} with {}% waste)",
        sheets_result.total_area_sqft, sheets_result.total_with_waste_sqft, waste_percent
    );
    println!();
    println!("Sheets ({}):", sheets_result.sheet_size);
    println!(
        "  {} sheets ({} wall + {} ceiling)",
        sheets_result.sheets_needed, sheets_result.wall_sheets, sheets_result.ceiling_sheets
    );
    println!();
    println!(
        "Cost ({}, {} sq ft):",
        project_type.display_name(),
        area_sqft
    );
    println!(
        "  Materials: ${:.0} - ${:.0}",
        cost_result.materials_cost.low, cost_result.materials_cost.high
    );
    if project_type.has_labor() {
        println!(
            "  Labor:     ${:.0} - ${:.0} ({}, {})",
            cost_result.labor_cost.low,
            cost_result.labor_cost.high,
            finish_level.display_name(),
            finish_level.level_range()
        );
    }
    println!(
        "  Total:     ${:.0} - ${:.0} (typical ~${:.0})",
        cost_result.total_cost.low,
        cost_result.total_cost.high,
        cost_result.total_cost.midpoint()
    );
    println!(
        "  Per sq ft: ${:.2} - ${:.2}",
        cost_result.cost_per_sqft.low, cost_result.cost_per_sqft.high
    );
    println!();
    println!(
        "Mud ({}, {} coats):",
        mud_result.mud_type.display_name(),
        coats
    );
    println!(
        "  {:.1} gallons -> {} five-gal bucket(s) + {} one-gal",
        mud_result.total_gallons, mud_result.five_gal_buckets, mud_result.one_gal_buckets
    );
    println!();
    println!("Screws ({}):", screws_result.stud_spacing.display_name());
    println!(
        "  {} screws (~{} per sheet) -> {} lb(s), {} box(es)",
        screws_result.total_screws,
        screws_result.screws_per_sheet,
        screws_result.pounds,
        screws_result.boxes
    );
    println!();
    println!("Tape:");
    println!(
        "  {} ft ({:.0} flat + {:.0} corner) -> {} x 500 ft, {} x 250 ft, {} x 75 ft",
        tape_result.linear_feet,
        tape_result.flat_tape_ft,
        tape_result.corner_tape_ft,
        tape_result.rolls_500,
        tape_result.rolls_250,
        tape_result.rolls_75
    );
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    let outputs = vec![
        EstimateOutput::Sheets(sheets_result),
        EstimateOutput::Cost(cost_result),
        EstimateOutput::Mud(mud_result),
        EstimateOutput::Screws(screws_result),
        EstimateOutput::Tape(tape_result),
    ];
    if let Ok(json) = serde_json::to_string_pretty(&outputs) {
        println!("{}", json);
    }
}

fn surfaces_label(walls: bool, ceiling: bool) -> &'static str {
    match (walls, ceiling) {
        (true, true) => "walls + ceiling",
        (true, false) => "walls only",
        (false, true) => "ceiling only",
        (false, false) => "none",
    }
}
