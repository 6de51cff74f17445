use narwhal::{DummyNode, Horizable, LayerNode};

#[test]
fn layer_node_starts_without_a_coordinate() {
    let real: LayerNode<&str> = LayerNode::real("a");
    let dummy: LayerNode<&str> = LayerNode::dummy(());

    assert_eq!(real.x(), None);
    assert_eq!(dummy.x(), None);
    assert!(!real.is_dummy());
    assert!(dummy.is_dummy());
}

#[test]
fn layer_node_exposes_data_of_real_nodes_only() {
    let real: LayerNode<&str, (u32, u32)> = LayerNode::real("a");
    let dummy: LayerNode<&str, (u32, u32)> = LayerNode::dummy((0, 3));

    assert_eq!(real.data(), Some(&"a"));
    assert_eq!(dummy.data(), None);
}

#[test]
fn layer_node_set_x_writes_the_variant_slot() {
    let mut real: LayerNode<&str, (u32, u32)> = LayerNode::real("a");
    let mut dummy: LayerNode<&str, (u32, u32)> = LayerNode::dummy((0, 3));

    real.set_x(1.5);
    dummy.set_x(2.5);

    assert_eq!(
        real,
        LayerNode::Real {
            data: "a",
            x: Some(1.5)
        }
    );
    assert_eq!(
        dummy,
        LayerNode::Dummy(DummyNode {
            edge: (0, 3),
            x: Some(2.5)
        })
    );
}
