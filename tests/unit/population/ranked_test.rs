use super::*;

fn create_individuals(data: &[(&str, f64)]) -> Vec<EvaluatedCandidate<String>> {
    data.iter().map(|&(name, fitness)| EvaluatedCandidate::new(name.to_string(), fitness)).collect()
}

parameterized_test! {can_rank_by_polarity, (values, natural, expected), {
    can_rank_by_polarity_impl(values, natural, expected);
}}

can_rank_by_polarity! {
    case_01: (vec![3., 1., 4.], true, vec![4., 3., 1.]),
    case_02: (vec![3., 1., 4.], false, vec![1., 3., 4.]),
    case_03: (vec![7.], true, vec![7.]),
}

fn can_rank_by_polarity_impl(values: Vec<f64>, natural: bool, expected: Vec<f64>) {
    let individuals = values.iter().map(|&value| EvaluatedCandidate::new(value, value)).collect();

    let population = RankedPopulation::from_evaluated(individuals, natural);

    assert_eq!(population.iter().map(|individual| individual.fitness()).collect::<Vec<_>>(), expected);
    assert_eq!(population.is_natural(), natural);
}

parameterized_test! {can_keep_insertion_order_for_equal_fitness, (natural, expected), {
    can_keep_insertion_order_for_equal_fitness_impl(natural, expected);
}}

can_keep_insertion_order_for_equal_fitness! {
    case_01: (true, vec!["b", "c", "a", "d"]),
    case_02: (false, vec!["a", "d", "b", "c"]),
}

fn can_keep_insertion_order_for_equal_fitness_impl(natural: bool, expected: Vec<&str>) {
    let individuals = create_individuals(&[("a", 1.), ("b", 2.), ("c", 2.), ("d", 1.)]);

    let population = RankedPopulation::from_evaluated(individuals, natural);

    let names = population.iter().map(|individual| individual.candidate().as_str()).collect::<Vec<_>>();
    assert_eq!(names, expected);
}

#[test]
fn can_access_best_individual() {
    let population = RankedPopulation::from_evaluated(create_individuals(&[("a", 1.), ("b", 5.)]), true);

    assert_eq!(population.best().map(|individual| individual.candidate().as_str()), Some("b"));
    assert_eq!(population.into_best().map(|individual| individual.into_candidate()), Some("b".to_string()));
}

#[test]
fn can_handle_empty_population() {
    let population = RankedPopulation::<String>::from_evaluated(vec![], true);

    assert!(population.is_empty());
    assert_eq!(population.len(), 0);
    assert!(population.best().is_none());
    assert!(population.into_best().is_none());
}
