use foldcalc::{
    error::BindingError,
    interpreter::variables::{Binding, VariableTable},
};

#[test]
fn table_set_get_remove() {
    let mut table = VariableTable::new();
    assert!(table.is_empty());

    table.set('x', 1.5);
    table.set('a', -2.0);
    table.set('x', 4.0);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get('x'), Some(4.0));
    assert_eq!(table.iter().collect::<Vec<_>>(), [('a', -2.0), ('x', 4.0)]);

    assert_eq!(table.remove('a'), Some(-2.0));
    assert_eq!(table.remove('a'), None);

    table.clear();
    assert!(table.is_empty());
}

#[test]
fn bindings_parse_name_and_value() {
    let binding: Binding = "z=-8.2".parse().unwrap();
    assert_eq!(binding, Binding { name: 'z', value: -8.2 });

    let binding: Binding = " q = 0,5 ".parse().unwrap();
    assert_eq!(binding, Binding { name: 'q', value: 0.5 });
}

#[test]
fn malformed_bindings_are_rejected() {
    assert_eq!("x3".parse::<Binding>(),
               Err(BindingError::MissingSeparator { binding: "x3".to_string() }));
    assert_eq!("xy=3".parse::<Binding>(),
               Err(BindingError::InvalidName { name: "xy".to_string() }));
    assert_eq!("1=3".parse::<Binding>(),
               Err(BindingError::InvalidName { name: "1".to_string() }));
    assert_eq!("x=abc".parse::<Binding>(),
               Err(BindingError::InvalidValue { value: "abc".to_string() }));
    assert_eq!("x=inf".parse::<Binding>(),
               Err(BindingError::InvalidValue { value: "inf".to_string() }));
}
