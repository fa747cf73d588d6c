//! Tests for the ligand-field engine and the configuration tables

#[cfg(test)]
mod tests {
    use super::super::{DElectronCount, LigandField, PhysicalParameters, StateResult, States};
    use crate::constants::ENERGY_TOLERANCE;
    use crate::error::LigandFieldError;
    use crate::tools::linspace;

    const TOLERANCE: f64 = 1e-6;

    fn solve(configuration: DElectronCount, dq: f64, b: f64, c: f64) -> StateResult {
        let params = PhysicalParameters::new(dq, b, c).unwrap();
        LigandField::new(configuration, params).solver().unwrap()
    }

    fn assert_term(result: &StateResult, label: &str, expected: &[f64]) {
        let energies = result
            .get(label)
            .unwrap_or_else(|| panic!("missing term {label}"));
        assert_eq!(energies.len(), expected.len(), "size of {label}");
        for (i, (actual, expected)) in energies.iter().zip(expected).enumerate() {
            assert!(
                (actual - expected).abs() < TOLERANCE,
                "{label}[{i}]: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_term_counts() {
        let expected = [
            (DElectronCount::D2, 7),
            (DElectronCount::D3, 8),
            (DElectronCount::D4, 12),
            (DElectronCount::D5, 11),
            (DElectronCount::D6, 12),
            (DElectronCount::D7, 8),
            (DElectronCount::D8, 7),
        ];
        for (configuration, count) in expected {
            assert_eq!(configuration.term_count(), count, "{configuration}");
            let result = LigandField::with_defaults(configuration, 1000.0)
                .unwrap()
                .solver()
                .unwrap();
            assert_eq!(result.len(), count, "{configuration}");
        }
    }

    #[test]
    fn test_state_counts() {
        let expected = [
            (DElectronCount::D2, 11),
            (DElectronCount::D3, 20),
            (DElectronCount::D4, 43),
            (DElectronCount::D5, 43),
            (DElectronCount::D6, 43),
            (DElectronCount::D7, 20),
            (DElectronCount::D8, 11),
        ];
        for (configuration, count) in expected {
            assert_eq!(configuration.state_count(), count, "{configuration}");
            let result = LigandField::with_defaults(configuration, 500.0)
                .unwrap()
                .solver()
                .unwrap();
            assert_eq!(result.state_count(), count);
            assert_eq!(result.subsplit().len(), count);
        }
    }

    #[test]
    fn test_ground_state_reads_zero() {
        for configuration in DElectronCount::ALL {
            for dq in linspace(0.0, 1500.0, 30) {
                let result = LigandField::with_defaults(configuration, dq)
                    .unwrap()
                    .solver()
                    .unwrap();
                let ground = result.get(result.ground_state()).unwrap();
                assert!(
                    ground[0].abs() < 1e-9,
                    "{configuration} at Dq = {dq}: ground {} = {}",
                    result.ground_state(),
                    ground[0]
                );
            }
        }
    }

    #[test]
    fn test_solver_is_idempotent() {
        for configuration in DElectronCount::ALL {
            let field = LigandField::with_defaults(configuration, 1234.5).unwrap();
            let first = field.solver().unwrap();
            let second = LigandField::with_defaults(configuration, 1234.5)
                .unwrap()
                .solver()
                .unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_policy_labels_exist() {
        for configuration in DElectronCount::ALL {
            let table = configuration.table();
            let policy = table.ground_state;
            assert!(table.term(policy.reference).is_some(), "{configuration}");
            if let Some(crossing) = policy.crossing {
                assert!(table.term(crossing.candidate).is_some(), "{configuration}");
            }
        }
    }

    #[test]
    fn test_labels_are_unique() {
        for configuration in DElectronCount::ALL {
            let labels: Vec<_> = configuration.table().terms.iter().map(|t| t.label).collect();
            for (i, label) in labels.iter().enumerate() {
                assert!(!labels[i + 1..].contains(label), "{configuration}: {label}");
            }
        }
    }

    #[test]
    fn test_couplings_stay_in_upper_triangle() {
        for configuration in DElectronCount::ALL {
            for term in configuration.table().terms {
                if let States::Block {
                    diagonal,
                    couplings,
                } = term.states
                {
                    for coupling in couplings {
                        assert!(coupling.row < coupling.col, "{}", term.label);
                        assert!(coupling.col < diagonal.len(), "{}", term.label);
                    }
                }
            }
        }
    }

    #[test]
    fn test_hamiltonians_are_symmetric() {
        for configuration in DElectronCount::ALL {
            let field = LigandField::with_defaults(configuration, 1800.0).unwrap();
            for term in configuration.table().terms {
                let matrix = field.hamiltonian(term.label).unwrap();
                assert_eq!(matrix.nrows(), term.size());
                assert_eq!(matrix, matrix.transpose(), "{configuration} {}", term.label);
            }
        }
    }

    #[test]
    fn test_term_states_are_sorted_and_unreferenced() {
        let field = LigandField::with_defaults(DElectronCount::D3, 2000.0).unwrap();
        let states = field.term_states("4_A_2").unwrap();
        assert!((states[0] - (-12.0 * 2000.0 - 15.0 * 918.0)).abs() < 1e-9);

        let block = field.term_states("2_T_2").unwrap();
        assert_eq!(block.len(), 5);
        assert!(block.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_d6_crossing_tolerance() {
        let policy = DElectronCount::D6.table().ground_state;
        let crossing = policy.crossing.unwrap();
        assert_eq!(policy.reference, "5_T_2");
        assert_eq!(crossing.candidate, "1_A_1");
        assert_eq!(crossing.tolerance, ENERGY_TOLERANCE);

        for configuration in [DElectronCount::D4, DElectronCount::D5, DElectronCount::D7] {
            let crossing = configuration.table().ground_state.crossing.unwrap();
            assert_eq!(crossing.tolerance, 0.0, "{configuration}");
        }
        for configuration in [DElectronCount::D2, DElectronCount::D3, DElectronCount::D8] {
            assert!(configuration.table().ground_state.crossing.is_none());
        }
    }

    /// Dq where `candidate` sits a hair above `reference`, gap in (0, ENERGY_TOLERANCE / 2]
    fn near_crossing(
        configuration: DElectronCount,
        reference: &str,
        candidate: &str,
    ) -> (f64, f64) {
        let gap = |dq: f64| {
            let field = LigandField::with_defaults(configuration, dq).unwrap();
            field.term_states(candidate).unwrap()[0] - field.term_states(reference).unwrap()[0]
        };
        let (mut lo, mut hi) = (0.0, 4000.0);
        assert!(gap(lo) > 0.0 && gap(hi) <= 0.0, "{configuration}: no crossing bracketed");
        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            let g = gap(mid);
            if g > 0.0 && g <= 0.5 * ENERGY_TOLERANCE {
                return (mid, g);
            }
            if g > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        panic!("{configuration}: bisection did not converge");
    }

    #[test]
    fn test_d6_switches_within_tolerance() {
        let (dq, gap) = near_crossing(DElectronCount::D6, "5_T_2", "1_A_1");
        let result = LigandField::with_defaults(DElectronCount::D6, dq)
            .unwrap()
            .solver()
            .unwrap();
        assert_eq!(result.ground_state(), "1_A_1", "Dq = {dq}, gap = {gap}");
        assert_eq!(result.get("1_A_1").unwrap()[0], 0.0);
        let high_spin = result.get("5_T_2").unwrap()[0];
        assert!(high_spin < 0.0 && high_spin > -ENERGY_TOLERANCE);
    }

    #[test]
    fn test_d4_needs_exact_crossing() {
        let (dq, gap) = near_crossing(DElectronCount::D4, "5_E_1", "3_T_1");
        let result = LigandField::with_defaults(DElectronCount::D4, dq)
            .unwrap()
            .solver()
            .unwrap();
        assert_eq!(result.ground_state(), "5_E_1", "Dq = {dq}, gap = {gap}");
        assert_eq!(result.get("5_E_1").unwrap()[0], 0.0);
        let low_spin = result.get("3_T_1").unwrap()[0];
        assert!(low_spin > 0.0 && low_spin <= 0.5 * ENERGY_TOLERANCE);
    }

    #[test]
    fn test_d6_weak_field_golden() {
        let result = solve(DElectronCount::D6, 0.0, 1065.0, 5120.0);
        assert_eq!(result.ground_state(), "5_T_2");
        assert_term(
            &result,
            "3_T_1",
            &[
                24740.000000000004,
                24740.000000000004,
                28321.94027738971,
                28419.236459564778,
                30065.0,
                61980.763540435284,
                62078.059722610335,
            ],
        );
        assert_term(
            &result,
            "1_A_1",
            &[
                37110.0,
                39839.30049645209,
                45880.398136931195,
                71040.69950354798,
                122549.60186306889,
            ],
        );
        assert_term(&result, "3_A_2", &[28419.23645956478, 61980.76354043522]);
        assert_term(&result, "1_A_2", &[37110.0, 53085.0]);
        assert_term(&result, "5_E_1", &[0.0]);
        assert_term(&result, "5_T_2", &[0.0]);
        assert_term(&result, "3_A_1", &[30065.0]);
    }

    #[test]
    fn test_d6_strong_field_golden() {
        let result = solve(DElectronCount::D6, 2500.0, 1065.0, 5120.0);
        assert_eq!(result.ground_state(), "1_A_1");
        assert_term(
            &result,
            "1_A_1",
            &[
                0.0,
                47901.73401842345,
                77292.00357140173,
                99989.40883017401,
                151418.05043977237,
            ],
        );
        assert!((result.get("3_T_1").unwrap()[0] - 10968.407529947952).abs() < TOLERANCE);
        assert_term(&result, "5_T_2", &[7036.239371954289]);
        assert_term(&result, "5_E_1", &[32036.23937195429]);
        assert_term(&result, "3_A_1", &[62101.23937195429]);
        assert_term(&result, "3_A_2", &[51853.34276443624, 77619.13597947234]);
    }

    #[test]
    fn test_d6_below_crossing() {
        let result = solve(DElectronCount::D6, 1500.0, 1065.0, 5120.0);
        assert_eq!(result.ground_state(), "5_T_2");
        assert!((result.get("1_A_1").unwrap()[0] - 12094.198355717352).abs() < TOLERANCE);
        assert_term(&result, "5_E_1", &[15000.0]);
        assert_term(&result, "3_A_1", &[45065.0]);
    }

    #[test]
    fn test_d3_golden() {
        let result = solve(DElectronCount::D3, 2000.0, 918.0, 4133.0);
        assert_eq!(result.ground_state(), "4_A_2");
        assert_term(&result, "4_T_1", &[28836.197294007015, 44933.80270599299]);
        assert_term(&result, "4_A_2", &[0.0]);
        assert_term(&result, "4_T_2", &[20000.0]);
        assert_term(&result, "2_A_1", &[36071.0]);
        assert_term(&result, "2_A_2", &[54431.0]);
        assert_term(
            &result,
            "2_E",
            &[
                19080.7918837524,
                41775.32714855591,
                64728.916230149436,
                89196.96473754224,
            ],
        );
        assert!((result.get("2_T_1").unwrap()[0] - 19912.30279591208).abs() < TOLERANCE);
        assert!((result.get("2_T_2").unwrap()[0] - 28331.83805104561).abs() < TOLERANCE);
    }

    #[test]
    fn test_d2_golden() {
        let result = solve(DElectronCount::D2, 1000.0, 860.0, 3801.0);
        assert_eq!(result.ground_state(), "3_T_1");
        assert_term(&result, "3_T_1", &[0.0, 20523.401277566052]);
        assert_term(&result, "1_T_1", &[26733.700638783026]);
        assert_term(&result, "3_T_2", &[8811.700638783024]);
        assert_term(&result, "3_A_2", &[18811.700638783026]);
        assert_term(&result, "1_A_1", &[25196.741513703026, 55875.65976386303]);
        assert_term(&result, "1_E", &[13700.722039584081, 33746.67923798197]);
        assert_term(&result, "1_T_3", &[13268.418794551693, 24178.982483014355]);
    }

    #[test]
    fn test_d8_golden() {
        let result = solve(DElectronCount::D8, 1000.0, 1030.0, 4850.0);
        assert_eq!(result.ground_state(), "3_A_2");
        assert_term(&result, "3_A_2", &[0.0]);
        assert_term(&result, "3_T_2", &[10000.0]);
        assert_term(&result, "1_T_1", &[32060.0]);
        assert_term(&result, "3_T_1", &[16534.230661702863, 28915.769338297137]);
        assert_term(&result, "1_E", &[17351.125676143485, 39558.874323856515]);
        assert_term(&result, "1_T_3", &[26886.436610643086, 40023.56338935692]);
        assert_term(&result, "1_A_1", &[27712.659123027406, 70957.3408769726]);
    }

    #[test]
    fn test_d4_golden() {
        let high_spin = solve(DElectronCount::D4, 2500.0, 965.0, 4449.0);
        assert_eq!(high_spin.ground_state(), "5_E_1");
        assert!((high_spin.get("3_T_1").unwrap()[0] - 1327.0240770185192).abs() < TOLERANCE);
        assert_term(&high_spin, "5_E_1", &[0.0]);
        assert_term(&high_spin, "5_T_2", &[25000.0]);
        assert_term(&high_spin, "3_A_1", &[26481.0]);
        assert_term(&high_spin, "3_A_2", &[27487.319271781213, 77331.68072821878]);

        let low_spin = solve(DElectronCount::D4, 3500.0, 965.0, 4449.0);
        assert_eq!(low_spin.ground_state(), "3_T_1");
        assert!(low_spin.get("3_T_1").unwrap()[0].abs() < 1e-9);
        assert_term(&low_spin, "5_E_1", &[8323.84993039017]);
        assert_term(&low_spin, "5_T_2", &[43323.84993039017]);
    }

    #[test]
    fn test_d5_golden() {
        let weak = solve(DElectronCount::D5, 0.0, 860.0, 3850.0);
        assert_eq!(weak.ground_state(), "6_A_1");
        assert_term(&weak, "6_A_1", &[0.0]);
        assert_term(&weak, "4_A_1", &[27850.0]);
        assert_term(&weak, "4_A_2", &[45870.0]);
        assert_term(&weak, "4_E", &[27850.0, 33870.0]);
        assert_term(&weak, "4_T_1", &[27850.0, 32970.0, 45870.0]);
        assert!((weak.get("2_T_2").unwrap()[0] - 40260.0).abs() < TOLERANCE);

        let strong = solve(DElectronCount::D5, 2500.0, 860.0, 3850.0);
        assert_eq!(strong.ground_state(), "2_T_2");
        assert!(strong.get("2_T_2").unwrap()[0].abs() < 1e-9);
        assert_term(&strong, "6_A_1", &[1292.739502362354]);
        assert_term(&strong, "4_E", &[29142.739502362354, 35162.739502362354]);
        assert_term(
            &strong,
            "4_T_1",
            &[7392.070136969389, 43833.814577564364, 59342.33379255334],
        );
    }

    #[test]
    fn test_d7_golden() {
        let high_spin = solve(DElectronCount::D7, 1000.0, 971.0, 4499.0);
        assert_eq!(high_spin.ground_state(), "4_T_1");
        assert_term(&high_spin, "4_T_1", &[0.0, 22066.246282501237]);
        assert_term(&high_spin, "4_T_2", &[8750.623141250617]);
        assert!((high_spin.get("2_E").unwrap()[0] - 10717.97192691963).abs() < TOLERANCE);

        let low_spin = solve(DElectronCount::D7, 2500.0, 971.0, 4499.0);
        assert_eq!(low_spin.ground_state(), "2_E");
        assert_term(&low_spin, "4_T_1", &[3869.623842760975, 39564.010306181255]);
        assert_term(&low_spin, "4_A_2", &[51934.317074471124]);
        assert_term(&low_spin, "4_T_2", &[26934.317074471117]);
        assert_term(&low_spin, "2_A_1", &[44315.317074471124]);
        assert_term(&low_spin, "2_A_2", &[63735.317074471124]);
    }

    #[test]
    fn test_subsplit_labels() {
        let result = solve(DElectronCount::D2, 1000.0, 860.0, 3801.0);
        let labels: Vec<String> = result.subsplit().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            [
                "1_A_1_0", "1_A_1_1", "1_E_0", "1_E_1", "1_T_3_0", "1_T_3_1", "3_T_1_0",
                "3_T_1_1", "1_T_1", "3_T_2", "3_A_2",
            ]
        );
    }

    #[test]
    fn test_invalid_configuration() {
        assert_eq!(
            DElectronCount::try_from(9u8),
            Err(LigandFieldError::InvalidConfiguration(9))
        );
        assert_eq!(
            DElectronCount::try_from(1u8),
            Err(LigandFieldError::InvalidConfiguration(1))
        );
        assert_eq!(DElectronCount::try_from(6u8), Ok(DElectronCount::D6));
        assert_eq!(u8::from(DElectronCount::D4), 4);
        assert_eq!(DElectronCount::D7.to_string(), "d7");
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            PhysicalParameters::new(f64::NAN, 1000.0, 4000.0),
            Err(LigandFieldError::InvalidParameter { name: "Dq", .. })
        ));
        assert!(matches!(
            PhysicalParameters::new(100.0, -1.0, 4000.0),
            Err(LigandFieldError::InvalidParameter { name: "B", .. })
        ));
        assert!(matches!(
            PhysicalParameters::new(100.0, 1000.0, f64::INFINITY),
            Err(LigandFieldError::InvalidParameter { name: "C", .. })
        ));
    }

    #[test]
    fn test_slater_condon_parameters() {
        let params = PhysicalParameters::from_slater_condon(1000.0, 10.0, 6.0).unwrap();
        assert_eq!(params.dq, 1000.0);
        assert!((params.b - 1097.352380952381).abs() < 1e-9);
        assert!((params.c - 3840.733333333333).abs() < 1e-9);

        // F4 large enough to push B negative
        assert!(PhysicalParameters::from_slater_condon(1000.0, 1.0, 10.0).is_err());
    }

    #[test]
    fn test_unknown_term() {
        let field = LigandField::with_defaults(DElectronCount::D8, 1000.0).unwrap();
        assert!(field.hamiltonian("6_A_1").is_none());
        assert_eq!(
            field.term_states("6_A_1"),
            Err(LigandFieldError::UnknownTerm {
                label: "6_A_1".to_string()
            })
        );
    }
}
