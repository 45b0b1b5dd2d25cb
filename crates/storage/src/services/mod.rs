pub mod standings_recalc;
